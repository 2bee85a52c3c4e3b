//! Validation utilities for dashboard inputs

use crate::types::GpsCoordinates;

/// Longest accepted city name
pub const MAX_CITY_NAME_LEN: usize = 64;

/// Largest trend series a client may request
pub const MAX_TREND_POINTS: usize = 500;

/// Validate a city name from a request path
pub fn validate_city_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("City name cannot be empty");
    }
    if trimmed.chars().count() > MAX_CITY_NAME_LEN {
        return Err("City name must be at most 64 characters");
    }
    Ok(())
}

/// Validate the requested number of trend points
pub fn validate_trend_points(points: usize) -> Result<(), &'static str> {
    if points == 0 {
        return Err("Trend must contain at least one point");
    }
    if points > MAX_TREND_POINTS {
        return Err("Trend must contain at most 500 points");
    }
    Ok(())
}

/// Validate the configured diameter of the largest map marker
pub fn validate_marker_size_max(size_max: f64) -> Result<(), &'static str> {
    if !size_max.is_finite() || size_max <= 0.0 {
        return Err("Marker size must be a positive, finite number");
    }
    Ok(())
}

/// Validate WGS84 coordinate ranges
pub fn validate_coordinates(coords: &GpsCoordinates) -> Result<(), &'static str> {
    if !(-90.0..=90.0).contains(&coords.latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&coords.longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CITIES;

    #[test]
    fn test_validate_city_name_valid() {
        assert!(validate_city_name("Delhi").is_ok());
        assert!(validate_city_name("  Bangalore ").is_ok());
    }

    #[test]
    fn test_validate_city_name_empty() {
        assert!(validate_city_name("").is_err());
        assert!(validate_city_name("   ").is_err());
    }

    #[test]
    fn test_validate_city_name_too_long() {
        let name = "x".repeat(MAX_CITY_NAME_LEN + 1);
        assert!(validate_city_name(&name).is_err());
        assert!(validate_city_name(&name[1..]).is_ok());
    }

    #[test]
    fn test_validate_trend_points_bounds() {
        assert!(validate_trend_points(0).is_err());
        assert!(validate_trend_points(1).is_ok());
        assert!(validate_trend_points(20).is_ok());
        assert!(validate_trend_points(MAX_TREND_POINTS).is_ok());
        assert!(validate_trend_points(MAX_TREND_POINTS + 1).is_err());
    }

    #[test]
    fn test_validate_marker_size_max() {
        assert!(validate_marker_size_max(30.0).is_ok());
        assert!(validate_marker_size_max(0.5).is_ok());
        assert!(validate_marker_size_max(0.0).is_err());
        assert!(validate_marker_size_max(-10.0).is_err());
        assert!(validate_marker_size_max(f64::NAN).is_err());
        assert!(validate_marker_size_max(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(&GpsCoordinates::new(0.0, 0.0)).is_ok());
        assert!(validate_coordinates(&GpsCoordinates::new(90.5, 0.0)).is_err());
        assert!(validate_coordinates(&GpsCoordinates::new(0.0, -181.0)).is_err());
        assert!(validate_coordinates(&GpsCoordinates::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_registry_coordinates_are_valid() {
        for city in CITIES {
            assert!(
                validate_coordinates(&city.location).is_ok(),
                "{} has invalid coordinates",
                city.name
            );
        }
    }
}
