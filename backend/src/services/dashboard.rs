//! Dashboard service: draws synthetic readings and assembles page data

use std::sync::{Arc, Mutex};

use shared::dashboard::{build_city_detail, build_snapshot};
use shared::{
    find_city, validate_city_name, validate_trend_points, AqiStatus, CityDetail,
    DashboardSnapshot, MapSettings, ReadingSource, CITIES,
};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Reading source shared by all requests
pub type SharedReadings = Arc<Mutex<Box<dyn ReadingSource + Send>>>;

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    readings: SharedReadings,
    map: MapSettings,
    trend_points: usize,
}

impl DashboardService {
    pub fn new(readings: SharedReadings, map: MapSettings, trend_points: usize) -> Self {
        Self {
            readings,
            map,
            trend_points,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.readings.clone(),
            state.config.map.settings(),
            state.config.simulation.trend_points,
        )
    }

    /// Map markers for every city plus the city selector
    pub fn snapshot(&self) -> AppResult<DashboardSnapshot> {
        let snapshot = self.with_source(|source| build_snapshot(CITIES, source, &self.map))?;
        tracing::debug!(markers = snapshot.map.markers.len(), "Built dashboard snapshot");
        Ok(snapshot)
    }

    /// Current reading, trend and donut for one city
    pub fn city_detail(&self, name: &str, points: Option<usize>) -> AppResult<CityDetail> {
        validate_city_name(name).map_err(|msg| AppError::validation("name", msg))?;
        let points = points.unwrap_or(self.trend_points);
        validate_trend_points(points).map_err(|msg| AppError::validation("points", msg))?;

        let city = find_city(name).ok_or_else(|| AppError::NotFound(format!("City {}", name.trim())))?;
        let detail = self.with_source(|source| build_city_detail(city, source, points))?;

        tracing::debug!(
            city = city.name,
            aqi = detail.aqi,
            status = %detail.severity,
            "Built city detail"
        );
        Ok(detail)
    }

    /// One fresh synthetic reading with its classification
    pub fn sample(&self) -> AppResult<AqiStatus> {
        let aqi = self.with_source(|source| source.next_reading())?;
        Ok(AqiStatus::from_reading(aqi))
    }

    fn with_source<T>(&self, f: impl FnOnce(&mut (dyn ReadingSource + Send)) -> T) -> AppResult<T> {
        let mut guard = self
            .readings
            .lock()
            .map_err(|_| AppError::Internal("Reading source lock poisoned".to_string()))?;
        Ok(f(&mut **guard))
    }
}
