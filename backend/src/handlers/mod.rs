//! HTTP handlers for the AQI dashboard

pub mod aqi;
pub mod dashboard;
pub mod health;
pub mod pages;

pub use aqi::*;
pub use dashboard::*;
pub use health::*;
pub use pages::*;
