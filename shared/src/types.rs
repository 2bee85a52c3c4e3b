//! Common types used across the dashboard

use serde::{Deserialize, Serialize};

/// An Air Quality Index value.
///
/// Unitless. The US EPA scale runs from 0 to 500, but nothing here rejects
/// values outside that range: classification is defined for every integer.
pub type Aqi = i32;

/// WGS84 coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A reading paired with its classification, as sent to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AqiStatus {
    pub aqi: Aqi,
    pub label: String,
    pub color: String,
}

impl AqiStatus {
    pub fn from_reading(aqi: Aqi) -> Self {
        let severity = crate::models::classify(aqi);
        Self {
            aqi,
            label: severity.label().to_string(),
            color: severity.color().to_string(),
        }
    }
}
