//! Reference data for Blacksburg, VA.

pub const TOWN: &str = "Blacksburg VA";

/// Major streets, roughly ordered from downtown and campus outwards.
pub const STREETS: &[&str] = &[
    // downtown
    "Main Street",
    "University City Boulevard",
    "South Main Street",
    "North Main Street",
    "Prices Fork Road",
    "Progress Street",
    "College Avenue",
    "Washington Street",
    "Clay Street",
    "Draper Road",
    "Tom's Creek Road",
    "Giles Road",
    "Harding Avenue",
    "Kabrich Street",
    "McBryde Drive",
    "Patrick Henry Drive",
    "Roanoke Street",
    "Turner Street",
    "Kent Street",
    "Eheart Street",
    "Lucas Avenue",
    "Preston Avenue",
    "Sturbridge Drive",
    "Alumni Mall",
    // campus
    "Duck Pond Drive",
    "Ag Quad Lane",
    "Beamer Way",
    "Research Center Drive",
    "Plantation Road",
    "Old Turner Street",
    "Faculty Street",
    "Stadium Drive",
    // residential
    "Foxridge Drive",
    "University Mall Drive",
    "Tall Oaks Drive",
    "Heather Drive",
    "Harvest Drive",
    "Hunter Hills Drive",
    "Hickory Street",
    "Knollwood Drive",
    "Laurel Street",
    "Lee Street",
    "Maple Avenue",
    "Oak Lane",
    "Pine Street",
    "Pleasant Street",
    "Ridgewood Drive",
    "Spring Street",
    "Sunset Boulevard",
    "Toms Creek Road",
    "Vista Drive",
    "Woodbine Drive",
    // apartment complexes
    "Pheasant Run Circle",
    "University Terrace Drive",
    "Collegiate Square",
    "Village Way",
    "Windsor Hills Drive",
    "Terrace View Drive",
    // newer developments
    "Innovation Drive",
    "Corporate Research Drive",
    "Technology Boulevard",
    "Southgate Drive",
    "Northside Drive",
    "Mill Creek Drive",
];

/// Apartment complexes and neighbourhoods students search for by name.
pub const HOUSING_AREAS: &[&str] = &[
    "University Terrace",
    "Pheasant Run Crossing",
    "Collegiate Suites",
    "The Village",
    "Windsor Hills",
    "Foxridge",
    "Hunter's Ridge",
    "Sturbridge Square",
    "Mill Creek",
    "University Mall area",
    "Downtown Blacksburg area",
    "Hethwood",
    "Blacksburg Country Club area",
];

/// Streets used to widen a query.
pub const POPULAR_STREETS: &[&str] = &[
    "Progress Street",
    "University City Boulevard",
    "Main Street",
    "Prices Fork Road",
    "College Avenue",
    "Patrick Henry Drive",
];

/// Complexes used to widen a query.
pub const POPULAR_COMPLEXES: &[&str] = &[
    "University Terrace",
    "Pheasant Run Crossing",
    "Collegiate Suites",
    "The Village",
    "Foxridge",
];

/// Rental sites the multi-query search is restricted to.
pub const LISTING_DOMAINS: &[&str] = &[
    "apartments.com",
    "zillow.com",
    "rent.com",
    "realtor.com",
];

/// Comma separated list of the first `limit` streets.
pub fn street_list(limit: usize) -> String {
    STREETS.iter().take(limit).copied().collect::<Vec<_>>().join(", ")
}

pub fn area_list() -> String {
    HOUSING_AREAS.join(", ")
}
