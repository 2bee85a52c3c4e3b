//! Domain models for the AQI dashboard

mod chart;
mod city;
mod dashboard;
mod page;
mod severity;

pub use chart::*;
pub use city::*;
pub use dashboard::*;
pub use page::*;
pub use severity::*;
