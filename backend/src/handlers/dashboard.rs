//! HTTP handlers for the dashboard page

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{City, CityDetail, DashboardSnapshot, CITIES};

use crate::error::AppResult;
use crate::services::DashboardService;
use crate::AppState;

/// List monitored cities
pub async fn list_cities() -> Json<Vec<City>> {
    Json(CITIES.to_vec())
}

/// Map markers with fresh readings for every city
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardSnapshot>> {
    let service = DashboardService::from_state(&state);
    let snapshot = service.snapshot()?;
    Ok(Json(snapshot))
}

/// Query parameters for a city detail view
#[derive(Debug, Deserialize)]
pub struct CityDetailQuery {
    pub points: Option<usize>,
}

/// Current reading, trend line and donut gauge for one city
pub async fn get_city_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<CityDetailQuery>, QueryRejection>,
) -> AppResult<Json<CityDetail>> {
    let Query(query) = query?;
    let service = DashboardService::from_state(&state);
    let detail = service.city_detail(&name, query.points)?;
    Ok(Json(detail))
}
