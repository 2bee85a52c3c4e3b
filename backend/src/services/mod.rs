//! Business logic services for the AQI dashboard

pub mod dashboard;

pub use dashboard::{DashboardService, SharedReadings};
