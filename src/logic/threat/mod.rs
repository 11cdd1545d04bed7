//! Threat Module
//!
//! Tính threat score từ sensor snapshot, phân loại level, và phát alert.
//! Đây là CORE STEP - nơi quyết định Nominal/Elevated/Critical.
//!
//! ## Structure
//! - `types`: Core types (ThreatLevel, ScoreBreakdown)
//! - `rules`: Thresholds, weights, `EngineConfig`
//! - `score`: Weighted score calculation
//! - `classifier`: Score -> level
//! - `alerts`: Hard thermal / altitude alerts
//!
//! ## Usage
//! ```
//! use shield_core::logic::threat::{classify_threat, compute_threat_score, ThreatLevel};
//! use shield_core::SensorInput;
//!
//! let input = SensorInput { crowd_density: 100, movement_compression: 100, ..Default::default() };
//! let score = compute_threat_score(&input);
//! assert_eq!(classify_threat(score), ThreatLevel::Elevated);
//! ```

pub mod types;
pub mod rules;
pub mod score;
pub mod classifier;
pub mod alerts;

// Re-export main types for convenience
pub use types::{ThreatLevel, ScoreBreakdown};

pub use rules::{
    EngineConfig,
    ScoreWeights,
    ScoreTier,
    LevelThresholds,
    AlertThresholds,
    RouteBands,
};

pub use score::{compute_threat_score, compute_threat_score_with_config, score_breakdown};
pub use classifier::{classify_threat, classify_threat_with_thresholds};
pub use alerts::{
    detect_thermal_alert,
    detect_thermal_alert_with_thresholds,
    detect_altitude_instability,
    detect_altitude_instability_with_thresholds,
};
