//! Route definitions for the AQI dashboard

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Sidebar navigation and static pages
        .nest("/pages", page_routes())
        .route("/cities", get(handlers::list_cities))
        // Map, trend and donut data
        .nest("/dashboard", dashboard_routes())
        .nest("/aqi", aqi_routes())
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_pages))
        .route("/:page", get(handlers::get_page))
}

fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route("/cities/:name", get(handlers::get_city_detail))
}

fn aqi_routes() -> Router<AppState> {
    Router::new()
        .route("/classify", get(handlers::classify_aqi))
        .route("/sample", get(handlers::sample_aqi))
}
