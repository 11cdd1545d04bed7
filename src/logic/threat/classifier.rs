//! Threat Classifier
//!
//! Score -> ThreatLevel. Lower bound of each band is inclusive.

use super::rules::LevelThresholds;
use super::types::ThreatLevel;

/// Classify with the default bands (30 / 70)
pub fn classify_threat(score: u8) -> ThreatLevel {
    classify_threat_with_thresholds(score, &LevelThresholds::default())
}

/// Classify with custom bands
pub fn classify_threat_with_thresholds(score: u8, thresholds: &LevelThresholds) -> ThreatLevel {
    if score < thresholds.elevated_min {
        ThreatLevel::Nominal
    } else if score < thresholds.critical_min {
        ThreatLevel::Elevated
    } else {
        ThreatLevel::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_threat(0), ThreatLevel::Nominal);
        assert_eq!(classify_threat(29), ThreatLevel::Nominal);
        assert_eq!(classify_threat(30), ThreatLevel::Elevated);
        assert_eq!(classify_threat(69), ThreatLevel::Elevated);
        assert_eq!(classify_threat(70), ThreatLevel::Critical);
        assert_eq!(classify_threat(100), ThreatLevel::Critical);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = LevelThresholds { elevated_min: 20, critical_min: 50 };
        assert_eq!(classify_threat_with_thresholds(25, &strict), ThreatLevel::Elevated);
        assert_eq!(classify_threat_with_thresholds(50, &strict), ThreatLevel::Critical);
    }
}
