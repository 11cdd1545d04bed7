//! Decision Module - Orchestrator
//!
//! Nối các bước: validate -> score -> level -> alerts -> routes -> explain,
//! đóng dấu thời gian và ghi vào history của engine.
//!
//! # Architecture
//! - `types.rs`: `DecisionOutput`
//! - `history.rs`: append-only log + `HistoryStats`
//! - `engine.rs`: `DecisionEngine`
//!
//! # Failure Strategy
//! Invalid snapshot -> `EngineError::InvalidSensorReading`, history untouched.

pub mod types;
pub mod history;
pub mod engine;

pub use types::DecisionOutput;
pub use history::{DecisionHistory, HistoryStats};
pub use engine::DecisionEngine;
