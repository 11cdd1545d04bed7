//! Shield Decision Core
//!
//! Rule-based threat decision engine: nhận một snapshot sensor, tính threat
//! score, phát alert, chọn route và ghi lại decision vào history.
//!
//! ## Structure
//! - `logic::sensor`: `SensorInput` + validation
//! - `logic::threat`: scoring, classification, alert detectors, rules
//! - `logic::route`: route classification & selection
//! - `logic::explain`: human-readable explanation
//! - `logic::decision`: `DecisionEngine` orchestrator + history
//! - `logic::features`: crowd feature helpers for acquisition layers
//!
//! ## Usage
//! ```
//! use shield_core::{DecisionEngine, SensorInput};
//!
//! let engine = DecisionEngine::new();
//! let input = SensorInput {
//!     crowd_density: 20,
//!     movement_compression: 10,
//!     noise_level: 15,
//!     route_a_congestion: 30,
//!     route_b_congestion: 45,
//!     route_c_congestion: 80,
//!     ..Default::default()
//! };
//!
//! let output = engine.decide(&input).unwrap();
//! assert_eq!(output.final_decision.to_string(), "Route A");
//! assert_eq!(engine.history().len(), 1);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

pub use config::AppConfig;
pub use error::{EngineError, EngineResult};

pub use logic::decision::{DecisionEngine, DecisionOutput, HistoryStats};
pub use logic::route::{FinalDecision, RouteId, RouteState, RouteStatus, RouteTable};
pub use logic::sensor::SensorInput;
pub use logic::threat::{EngineConfig, ThreatLevel};
