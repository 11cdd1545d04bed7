//! Hard alert detectors.
//!
//! Alert tier (50 / 10) is independent from the score tier (45 / 8): the
//! score reacts first, the alert fires later.

use super::rules::AlertThresholds;
use crate::logic::sensor::SensorInput;

pub fn detect_thermal_alert(input: &SensorInput) -> bool {
    detect_thermal_alert_with_thresholds(input, &AlertThresholds::default())
}

pub fn detect_thermal_alert_with_thresholds(input: &SensorInput, t: &AlertThresholds) -> bool {
    input.thermal_max > t.thermal_max || input.thermal_variance > t.thermal_variance
}

pub fn detect_altitude_instability(input: &SensorInput) -> bool {
    detect_altitude_instability_with_thresholds(input, &AlertThresholds::default())
}

pub fn detect_altitude_instability_with_thresholds(input: &SensorInput, t: &AlertThresholds) -> bool {
    input.altitude_variance > t.altitude_variance
}
