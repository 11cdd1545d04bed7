//! Logic Module - Decision Rules & Engine
//!
//! Chứa các bước xử lý: Sensor validation, Threat scoring, Route selection,
//! Explain, và Decision engine (orchestrator + history).

// Core pipeline
pub mod sensor;
pub mod threat;
pub mod route;
pub mod explain;
pub mod decision;

// Feature helpers for acquisition layers
pub mod features;
