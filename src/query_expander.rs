use std::iter::Chain;
use std::slice::Iter;

use crate::town::{POPULAR_COMPLEXES, POPULAR_STREETS, TOWN};

/// How many variants the search pipeline actually issues.
pub const MAX_QUERY_VARIANTS: usize = 3;

/// Lazily yields the original query, then the query qualified with each popular
/// street, then with each popular complex. Consumers decide how many to take.
pub struct QueryVariants<'a> {
    query: &'a str,
    places: Chain<Iter<'a, &'static str>, Iter<'a, &'static str>>,
    yielded_original: bool,
}

impl<'a> QueryVariants<'a> {
    pub fn new(query: &'a str) -> QueryVariants<'a> {
        QueryVariants::with_places(query, POPULAR_STREETS, POPULAR_COMPLEXES)
    }

    pub fn with_places(
        query: &'a str,
        streets: &'a [&'static str],
        complexes: &'a [&'static str],
    ) -> QueryVariants<'a> {
        QueryVariants {
            query,
            places: streets.iter().chain(complexes.iter()),
            yielded_original: false,
        }
    }
}

impl Iterator for QueryVariants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.yielded_original {
            self.yielded_original = true;
            return Some(self.query.to_string());
        }
        self.places
            .next()
            .map(|place| format!("{} {place} {TOWN}", self.query))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(!self.yielded_original);
        let (lower, upper) = self.places.size_hint();
        (lower + pending, upper.map(|u| u + pending))
    }
}

/// Shorthand for the capped variant list the pipeline searches with.
pub fn expand_query(query: &str) -> Vec<String> {
    QueryVariants::new(query).take(MAX_QUERY_VARIANTS).collect()
}
