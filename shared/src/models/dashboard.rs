//! Dashboard page view models

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{City, CityMap, DonutChart, Severity, TrendSeries};
use crate::types::Aqi;

/// Everything shown after a city is selected
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityDetail {
    pub city: City,
    pub aqi: Aqi,
    pub severity: Severity,
    pub label: String,
    pub color: String,
    /// Caption of the metric tile, e.g. "Current AQI - Delhi"
    pub metric_label: String,
    pub trend: TrendSeries,
    pub donut: DonutChart,
}

/// The dashboard page before a city is selected
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub map: CityMap,
    pub cities: Vec<String>,
}
