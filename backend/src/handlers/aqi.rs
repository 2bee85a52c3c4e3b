//! HTTP handlers for raw AQI classification and sampling

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{Aqi, AqiStatus};

use crate::error::AppResult;
use crate::services::DashboardService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub aqi: Aqi,
}

/// Classify an arbitrary AQI value
pub async fn classify_aqi(
    query: Result<Query<ClassifyQuery>, QueryRejection>,
) -> AppResult<Json<AqiStatus>> {
    let Query(query) = query?;
    Ok(Json(AqiStatus::from_reading(query.aqi)))
}

/// Draw one synthetic reading
pub async fn sample_aqi(State(state): State<AppState>) -> AppResult<Json<AqiStatus>> {
    let service = DashboardService::from_state(&state);
    let status = service.sample()?;
    Ok(Json(status))
}
