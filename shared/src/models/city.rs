//! Monitored city registry

use serde::Serialize;

use crate::types::GpsCoordinates;

/// A city shown on the dashboard map
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub location: GpsCoordinates,
}

/// All monitored cities, in the order they appear in the city selector.
pub static CITIES: &[City] = &[
    City {
        name: "Delhi",
        location: GpsCoordinates::new(28.61, 77.20),
    },
    City {
        name: "Mumbai",
        location: GpsCoordinates::new(19.07, 72.87),
    },
    City {
        name: "Bangalore",
        location: GpsCoordinates::new(12.97, 77.59),
    },
    City {
        name: "Kolkata",
        location: GpsCoordinates::new(22.57, 88.36),
    },
];

/// Looks up a city by name, ignoring case and surrounding whitespace.
pub fn find_city(name: &str) -> Option<&'static City> {
    let name = name.trim();
    CITIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// City names in selector order
pub fn city_names() -> Vec<&'static str> {
    CITIES.iter().map(|c| c.name).collect()
}
