//! Dashboard assembly tests
//!
//! Tests for the dashboard page including:
//! - City selection with a known reading
//! - Map marker sizing
//! - Donut gauge values

use proptest::prelude::*;
use shared::dashboard::{build_city_detail, build_map, build_snapshot};
use shared::{
    donut_values, find_city, MapSettings, ReplayReadings, Severity, SyntheticReadings, CITIES,
    DEFAULT_TREND_POINTS, DONUT_MAX,
};

#[test]
fn delhi_selected_with_reading_175() {
    let delhi = find_city("Delhi").unwrap();
    let mut source = ReplayReadings::new(vec![175]).unwrap();

    let detail = build_city_detail(delhi, &mut source, DEFAULT_TREND_POINTS);

    assert_eq!(detail.aqi, 175);
    assert_eq!(detail.severity, Severity::Unhealthy);
    assert_eq!(detail.label, "Unhealthy");
    assert_eq!(detail.color, "red");
    assert_eq!(detail.donut.values(), [175, 125]);
    assert_eq!(detail.donut.slices[0].color, "red");
    assert_eq!(detail.trend.title, "AQI Trend - Delhi");
    assert_eq!(detail.trend.len(), DEFAULT_TREND_POINTS);
}

#[test]
fn trend_time_steps_are_consecutive() {
    let city = find_city("Bangalore").unwrap();
    let mut source = SyntheticReadings::seeded(8);
    let detail = build_city_detail(city, &mut source, 12);
    let times: Vec<usize> = detail.trend.points.iter().map(|p| p.time).collect();
    assert_eq!(times, (0..12).collect::<Vec<_>>());
}

#[test]
fn map_uses_configured_settings() {
    let settings = MapSettings {
        zoom: 6,
        height: 400,
        size_max: 50.0,
        style: "carto-positron".to_string(),
    };
    let mut source = ReplayReadings::new(vec![50, 200]).unwrap();
    let map = build_map(CITIES, &mut source, &settings);

    assert_eq!(map.settings, settings);
    assert_eq!(map.markers[1].size, 50.0);
    // a quarter of the largest reading gets half the diameter
    assert_eq!(map.markers[0].size, 25.0);
}

#[test]
fn snapshot_reads_one_value_per_city() {
    let mut source = ReplayReadings::new(vec![31, 32, 33, 34, 35]).unwrap();
    let snapshot = build_snapshot(CITIES, &mut source, &MapSettings::default());
    let readings: Vec<i32> = snapshot.map.markers.iter().map(|m| m.aqi).collect();
    assert_eq!(readings, vec![31, 32, 33, 34]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Synthetic readings always fill the gauge exactly
    #[test]
    fn prop_donut_sums_to_max(aqi in 30..=300i32) {
        let [current, remaining] = donut_values(aqi);
        prop_assert_eq!(current + remaining, DONUT_MAX);
    }

    /// No marker is ever drawn larger than size_max
    #[test]
    fn prop_marker_size_bounded(seed in any::<u64>()) {
        let settings = MapSettings::default();
        let map = build_map(CITIES, &mut SyntheticReadings::seeded(seed), &settings);
        prop_assert!(map.markers.iter().all(|m| m.size > 0.0 && m.size <= settings.size_max));
    }

    /// Marker color always follows the reading's classification
    #[test]
    fn prop_marker_color_matches_classification(seed in any::<u64>()) {
        let map = build_map(CITIES, &mut SyntheticReadings::seeded(seed), &MapSettings::default());
        for marker in &map.markers {
            prop_assert_eq!(marker.color.as_str(), shared::classify(marker.aqi).color());
        }
    }
}
