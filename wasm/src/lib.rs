//! WebAssembly module for the AQI dashboard
//!
//! Provides client-side computation for:
//! - AQI classification (label and color)
//! - Donut gauge values
//! - Map marker sizing
//! - Trend length validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript glue code
pub use shared::{Aqi, AqiStatus, Severity};

/// Status label for an AQI value, e.g. "Moderate"
#[wasm_bindgen]
pub fn aqi_status_label(aqi: i32) -> String {
    shared::classify(aqi).label().to_string()
}

/// Display color for an AQI value, e.g. "yellow"
#[wasm_bindgen]
pub fn aqi_status_color(aqi: i32) -> String {
    shared::classify(aqi).color().to_string()
}

/// Classification as JSON: `{"aqi":..,"label":..,"color":..}`
#[wasm_bindgen]
pub fn classify_aqi_json(aqi: i32) -> Result<String, JsValue> {
    serde_json::to_string(&AqiStatus::from_reading(aqi))
        .map_err(|e| JsValue::from_str(&format!("Failed to encode status: {}", e)))
}

/// `[current, remaining]` slices of the donut gauge
#[wasm_bindgen]
pub fn donut_values(aqi: i32) -> Vec<i32> {
    shared::donut_values(aqi).to_vec()
}

/// Marker diameter (area-scaled) relative to the largest reading on the map
#[wasm_bindgen]
pub fn map_marker_size(aqi: i32, max_aqi: i32, size_max: f64) -> f64 {
    shared::marker_size(aqi, max_aqi, size_max)
}

/// Whether a trend of this many points would be accepted by the server
#[wasm_bindgen]
pub fn is_valid_trend_points(points: usize) -> bool {
    shared::validate_trend_points(points).is_ok()
}
