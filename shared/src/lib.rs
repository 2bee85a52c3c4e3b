//! Shared types and logic for the AQI dashboard
//!
//! Holds the AQI classifier, the synthetic reading generator and the
//! dashboard view models used by the backend and the WASM client.

pub mod dashboard;
pub mod models;
pub mod sampling;
pub mod types;
pub mod validation;

pub use models::*;
pub use sampling::*;
pub use types::*;
pub use validation::*;
