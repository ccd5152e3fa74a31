use std::any::Any;
use std::sync::Arc;

use axum::{
    Router,
    http::Response,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::rental_search::RentalSearch;
use crate::site_lookup::SiteLookup;

use self::models::ApiError;

pub mod handlers;
pub mod models;

#[derive(Clone)]
pub struct AppState {
    pub rentals: Arc<RentalSearch>,
    pub sites: Arc<SiteLookup>,
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<axum::body::Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("error in request handler: {detail}");
    ApiError::Internal.into_response()
}

pub fn create_router(state: AppState) -> Router {
    // the browser front end is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/api/search", post(handlers::search_handler))
        .route("/api/search-sites", post(handlers::search_sites_handler))
        .route("/api/health", get(handlers::health_handler))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
