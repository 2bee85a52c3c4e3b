//! Assembles dashboard view models from a reading source

use chrono::Utc;

use crate::models::{
    classify, marker_size, City, CityDetail, CityMap, DashboardSnapshot, DonutChart, MapMarker,
    MapSettings, TrendSeries,
};
use crate::sampling::ReadingSource;

/// Draw one reading per city, in slice order, and place a marker for each.
pub fn build_map<S>(cities: &[City], source: &mut S, settings: &MapSettings) -> CityMap
where
    S: ReadingSource + ?Sized,
{
    let readings = source.take_readings(cities.len());
    let max_aqi = readings.iter().copied().max().unwrap_or(0);

    let markers = cities
        .iter()
        .zip(readings)
        .map(|(city, aqi)| {
            let severity = classify(aqi);
            MapMarker {
                city: city.name.to_string(),
                location: city.location,
                aqi,
                severity,
                color: severity.color().to_string(),
                size: marker_size(aqi, max_aqi, settings.size_max),
            }
        })
        .collect();

    CityMap {
        settings: settings.clone(),
        markers,
    }
}

/// Detail view for a selected city.
///
/// The current reading is drawn before the trend readings.
pub fn build_city_detail<S>(city: &City, source: &mut S, trend_points: usize) -> CityDetail
where
    S: ReadingSource + ?Sized,
{
    let aqi = source.next_reading();
    let severity = classify(aqi);
    let trend = TrendSeries::new(city.name, source.take_readings(trend_points));

    CityDetail {
        city: *city,
        aqi,
        severity,
        label: severity.label().to_string(),
        color: severity.color().to_string(),
        metric_label: format!("Current AQI - {}", city.name),
        trend,
        donut: DonutChart::for_reading(aqi),
    }
}

pub fn build_snapshot<S>(cities: &[City], source: &mut S, settings: &MapSettings) -> DashboardSnapshot
where
    S: ReadingSource + ?Sized,
{
    DashboardSnapshot {
        generated_at: Utc::now(),
        map: build_map(cities, source, settings),
        cities: cities.iter().map(|c| c.name.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{find_city, Severity, CITIES};
    use crate::sampling::ReplayReadings;

    #[test]
    fn test_map_has_one_marker_per_city() {
        let mut source = ReplayReadings::new(vec![40, 120, 240, 300]).unwrap();
        let map = build_map(CITIES, &mut source, &MapSettings::default());

        let names: Vec<&str> = map.markers.iter().map(|m| m.city.as_str()).collect();
        assert_eq!(names, vec!["Delhi", "Mumbai", "Bangalore", "Kolkata"]);
        assert_eq!(map.markers[0].color, "green");
        assert_eq!(map.markers[2].severity, Severity::VeryUnhealthy);
        assert_eq!(map.markers[3].size, 30.0);
        assert!((map.markers[1].size - 30.0 * 0.4f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_map_with_no_cities() {
        let mut source = ReplayReadings::new(vec![100]).unwrap();
        let map = build_map(&[], &mut source, &MapSettings::default());
        assert!(map.markers.is_empty());
    }

    #[test]
    fn test_detail_draws_current_reading_first() {
        let city = find_city("Delhi").unwrap();
        let mut source = ReplayReadings::new(vec![175, 60, 61, 62]).unwrap();
        let detail = build_city_detail(city, &mut source, 3);

        assert_eq!(detail.aqi, 175);
        assert_eq!((detail.label.as_str(), detail.color.as_str()), ("Unhealthy", "red"));
        assert_eq!(detail.metric_label, "Current AQI - Delhi");
        let trend: Vec<i32> = detail.trend.points.iter().map(|p| p.aqi).collect();
        assert_eq!(trend, vec![60, 61, 62]);
        assert_eq!(detail.donut.values(), [175, 125]);
    }

    #[test]
    fn test_snapshot_lists_selectable_cities() {
        let mut source = ReplayReadings::new(vec![55, 65, 75, 85]).unwrap();
        let snapshot = build_snapshot(CITIES, &mut source, &MapSettings::default());
        assert_eq!(snapshot.cities, vec!["Delhi", "Mumbai", "Bangalore", "Kolkata"]);
        assert_eq!(snapshot.map.markers.len(), 4);
    }
}
