//! Chart-ready data for the map, trend line and donut gauge

use serde::{Deserialize, Serialize};

use crate::models::{classify, Severity};
use crate::types::{Aqi, GpsCoordinates};

/// Upper end of the donut gauge scale
pub const DONUT_MAX: Aqi = 300;

/// Color of the donut's "remaining" slice
pub const DONUT_REMAINDER_COLOR: &str = "lightgrey";

/// Fraction of the donut radius left empty
pub const DONUT_HOLE: f64 = 0.6;

/// Default number of points in a trend series
pub const DEFAULT_TREND_POINTS: usize = 20;

// ============================================================================
// Map
// ============================================================================

/// Map rendering settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapSettings {
    pub zoom: u8,
    pub height: u32,
    /// Diameter of the largest marker, in pixels
    pub size_max: f64,
    pub style: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            zoom: 4,
            height: 500,
            size_max: 30.0,
            style: "open-street-map".to_string(),
        }
    }
}

/// One city marker on the map
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapMarker {
    pub city: String,
    pub location: GpsCoordinates,
    pub aqi: Aqi,
    pub severity: Severity,
    pub color: String,
    pub size: f64,
}

/// Markers plus the settings they were sized against
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityMap {
    pub settings: MapSettings,
    pub markers: Vec<MapMarker>,
}

/// Marker diameter. Markers are sized by area, so the diameter grows with the
/// square root of the reading relative to the largest reading on the map.
/// Non-positive readings get a zero-size marker.
pub fn marker_size(aqi: Aqi, max_aqi: Aqi, size_max: f64) -> f64 {
    if aqi <= 0 || max_aqi <= 0 {
        return 0.0;
    }
    let ratio = f64::from(aqi) / f64::from(max_aqi);
    (ratio.sqrt() * size_max).min(size_max)
}

// ============================================================================
// Trend line
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendPoint {
    pub time: usize,
    pub aqi: Aqi,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendSeries {
    pub title: String,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn new(city: &str, readings: impl IntoIterator<Item = Aqi>) -> Self {
        let points = readings
            .into_iter()
            .enumerate()
            .map(|(time, aqi)| TrendPoint { time, aqi })
            .collect();
        Self {
            title: format!("AQI Trend - {}", city),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ============================================================================
// Donut gauge
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DonutSlice {
    pub name: String,
    pub value: Aqi,
    pub color: String,
}

/// Two-slice gauge: the current reading against the distance to `DONUT_MAX`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonutChart {
    pub hole: f64,
    pub slices: [DonutSlice; 2],
}

impl DonutChart {
    pub fn for_reading(aqi: Aqi) -> Self {
        let [current, remaining] = donut_values(aqi);
        Self {
            hole: DONUT_HOLE,
            slices: [
                DonutSlice {
                    name: "Current AQI".to_string(),
                    value: current,
                    color: classify(aqi).color().to_string(),
                },
                DonutSlice {
                    name: "Remaining to Max".to_string(),
                    value: remaining,
                    color: DONUT_REMAINDER_COLOR.to_string(),
                },
            ],
        }
    }

    pub fn values(&self) -> [Aqi; 2] {
        [self.slices[0].value, self.slices[1].value]
    }
}

/// `[current, DONUT_MAX - current]`, with the remainder floored at zero for
/// readings past the top of the gauge.
pub fn donut_values(aqi: Aqi) -> [Aqi; 2] {
    [aqi, DONUT_MAX.saturating_sub(aqi).max(0)]
}
