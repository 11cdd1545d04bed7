//! Threat Types
//!
//! Core types cho threat scoring.
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// THREAT LEVEL
// ============================================================================

/// Coarse threat band derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatLevel {
    /// Score < 30
    Nominal,
    /// 30 <= score < 70
    Elevated,
    /// Score >= 70
    Critical,
}

impl ThreatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Nominal => "NOMINAL",
            ThreatLevel::Elevated => "ELEVATED",
            ThreatLevel::Critical => "CRITICAL",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            ThreatLevel::Nominal => 0,
            ThreatLevel::Elevated => 1,
            ThreatLevel::Critical => 2,
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// How the final score was assembled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 0 or 100
    pub anomaly_component: f64,
    /// 0, 40, 60 or 100
    pub thermal_component: f64,
    /// 0-100
    pub altitude_component: f64,
    /// Weighted sum before rounding
    pub weighted_base: f64,
    /// Points added for night mode (0 when off)
    pub night_bonus: u8,
    pub final_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serializes_upper_case() {
        let json = serde_json::to_string(&ThreatLevel::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");

        let level: ThreatLevel = serde_json::from_str("\"ELEVATED\"").unwrap();
        assert_eq!(level, ThreatLevel::Elevated);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(ThreatLevel::Nominal.severity_level() < ThreatLevel::Elevated.severity_level());
        assert!(ThreatLevel::Elevated.severity_level() < ThreatLevel::Critical.severity_level());
        assert_eq!(ThreatLevel::Nominal.to_string(), "NOMINAL");
    }
}
