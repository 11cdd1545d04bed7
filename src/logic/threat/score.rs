//! Threat Score Calculator
//!
//! CHỈ chứa logic tính score - không có types, không có alert.
//! Input: SensorInput (đã validate)
//! Output: score 0-100

use super::rules::{EngineConfig, ANOMALY_POINTS, COMPONENT_CAP, MAX_SCORE};
use super::types::ScoreBreakdown;
use crate::logic::sensor::SensorInput;

/// Snap the weighted sum to 6 decimals before rounding (29.4999.. -> 29.5)
const BASE_PRECISION: f64 = 1e6;

// ============================================================================
// MAIN SCORE FUNCTION
// ============================================================================

/// Compute the bounded threat score with the default rule set
pub fn compute_threat_score(input: &SensorInput) -> u8 {
    compute_threat_score_with_config(input, &EngineConfig::default())
}

/// Compute the bounded threat score with custom weights/thresholds
pub fn compute_threat_score_with_config(input: &SensorInput, config: &EngineConfig) -> u8 {
    score_breakdown(input, config).final_score
}

/// Full score computation, keeping every intermediate component.
///
/// The weighted sum is snapped to 6 decimals, then rounded half away from
/// zero (`f64::round`), so an exact x.5 base always rounds up. The night bonus is added
/// to the rounded value, so night mode always adds exactly `night_bonus`
/// points before the 100 cap.
pub fn score_breakdown(input: &SensorInput, config: &EngineConfig) -> ScoreBreakdown {
    let tier = &config.score_tier;
    let w = &config.weights;

    let anomaly_component = if input.anomaly_flag { ANOMALY_POINTS } else { 0.0 };

    let mut thermal_component = 0.0;
    if input.thermal_max > tier.thermal_max {
        thermal_component += tier.thermal_max_points;
    }
    if input.thermal_variance > tier.thermal_variance {
        thermal_component += tier.thermal_variance_points;
    }

    let altitude_component = (input.altitude_variance * tier.altitude_variance_scale)
        .floor()
        .min(COMPONENT_CAP);

    let raw_base = w.crowd_density * f64::from(input.crowd_density)
        + w.movement_compression * f64::from(input.movement_compression)
        + w.noise_level * f64::from(input.noise_level)
        + w.anomaly * anomaly_component
        + w.thermal * thermal_component
        + w.altitude * altitude_component;
    let weighted_base = (raw_base * BASE_PRECISION).round() / BASE_PRECISION;

    let night_bonus = if input.night_mode { config.night_bonus } else { 0 };

    // Inputs are validated non-negative; max(0) only guards custom configs
    let rounded = weighted_base.round().max(0.0);
    let final_score = (rounded + f64::from(night_bonus)).min(f64::from(MAX_SCORE)) as u8;

    ScoreBreakdown {
        anomaly_component,
        thermal_component,
        altitude_component,
        weighted_base,
        night_bonus,
        final_score,
    }
}

// ============================================================================
// TESTS
// ============================================================================
