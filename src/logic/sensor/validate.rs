use super::types::SensorInput;
use crate::error::{EngineError, EngineResult};

/// Congestion is a percentage; anything outside is an upstream bug.
const CONGESTION_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

/// Validate a snapshot before scoring.
///
/// Crowd readings above 100 are accepted (the score clamp caps them);
/// negatives, non-finite floats, negative variances and congestion outside
/// 0-100 are rejected.
pub fn validate_input(input: &SensorInput) -> EngineResult<()> {
    check_non_negative("crowd_density", input.crowd_density)?;
    check_non_negative("movement_compression", input.movement_compression)?;
    check_non_negative("noise_level", input.noise_level)?;

    check_finite("thermal_max", input.thermal_max)?;
    check_variance("thermal_variance", input.thermal_variance)?;
    check_variance("altitude_variance", input.altitude_variance)?;

    check_congestion("route_a_congestion", input.route_a_congestion)?;
    check_congestion("route_b_congestion", input.route_b_congestion)?;
    check_congestion("route_c_congestion", input.route_c_congestion)?;

    Ok(())
}

fn check_non_negative(field: &'static str, value: i32) -> EngineResult<()> {
    if value < 0 {
        return Err(EngineError::invalid_reading(
            field,
            format!("must be >= 0, got {}", value),
        ));
    }
    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::invalid_reading(
            field,
            format!("must be finite, got {}", value),
        ));
    }
    Ok(())
}

fn check_variance(field: &'static str, value: f64) -> EngineResult<()> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(EngineError::invalid_reading(
            field,
            format!("variance must be >= 0, got {}", value),
        ));
    }
    Ok(())
}

fn check_congestion(field: &'static str, value: i32) -> EngineResult<()> {
    if !CONGESTION_RANGE.contains(&value) {
        return Err(EngineError::invalid_reading(
            field,
            format!("must be within 0-100, got {}", value),
        ));
    }
    Ok(())
}
