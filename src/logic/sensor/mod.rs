//! Sensor Module
//!
//! Input của engine: một `SensorInput` cho mỗi observation cycle.
//!
//! ## Structure
//! - `types`: `SensorInput` + JSON loading
//! - `validate`: domain checks run before scoring

pub mod types;
pub mod validate;

pub use types::SensorInput;
pub use validate::validate_input;
