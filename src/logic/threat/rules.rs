//! Decision Rules & Thresholds
//!
//! Định nghĩa các threshold, weight và band cho toàn bộ pipeline.
//! KHÔNG chứa logic tính score - chỉ constants và config.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

// ============================================================================
// SCORE WEIGHTS
// ============================================================================

pub const CROWD_DENSITY_WEIGHT: f64 = 0.30;
pub const MOVEMENT_COMPRESSION_WEIGHT: f64 = 0.25;
pub const NOISE_LEVEL_WEIGHT: f64 = 0.15;
pub const ANOMALY_WEIGHT: f64 = 0.10;
pub const THERMAL_WEIGHT: f64 = 0.10;
pub const ALTITUDE_WEIGHT: f64 = 0.10;

// ============================================================================
// SCORE TIER (feeds the score, fires earlier than hard alerts)
// ============================================================================

pub const ANOMALY_POINTS: f64 = 100.0;

pub const SCORE_THERMAL_MAX: f64 = 45.0;
pub const SCORE_THERMAL_MAX_POINTS: f64 = 60.0;
pub const SCORE_THERMAL_VARIANCE: f64 = 8.0;
pub const SCORE_THERMAL_VARIANCE_POINTS: f64 = 40.0;

/// altitude_component = min(100, floor(variance * scale))
pub const ALTITUDE_VARIANCE_SCALE: f64 = 10.0;
pub const COMPONENT_CAP: f64 = 100.0;

/// Flat bonus added after rounding when night mode is on
pub const NIGHT_BONUS: u8 = 5;

pub const MAX_SCORE: u8 = 100;

// ============================================================================
// LEVEL THRESHOLDS
// ============================================================================

/// At or above = Elevated
pub const ELEVATED_THRESHOLD: u8 = 30;

/// At or above = Critical
pub const CRITICAL_THRESHOLD: u8 = 70;

// ============================================================================
// HARD ALERTS
// ============================================================================

pub const ALERT_THERMAL_MAX: f64 = 50.0;
pub const ALERT_THERMAL_VARIANCE: f64 = 10.0;
pub const ALERT_ALTITUDE_VARIANCE: f64 = 6.0;

// ============================================================================
// ROUTE BANDS
// ============================================================================

/// At or above = Delayed
pub const ROUTE_DELAYED_THRESHOLD: i32 = 40;

/// At or above = Reroute
pub const ROUTE_REROUTE_THRESHOLD: i32 = 70;

// ============================================================================
// CONFIGURABLE THRESHOLDS (for runtime adjustment)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreWeights {
    pub crowd_density: f64,
    pub movement_compression: f64,
    pub noise_level: f64,
    pub anomaly: f64,
    pub thermal: f64,
    pub altitude: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            crowd_density: CROWD_DENSITY_WEIGHT,
            movement_compression: MOVEMENT_COMPRESSION_WEIGHT,
            noise_level: NOISE_LEVEL_WEIGHT,
            anomaly: ANOMALY_WEIGHT,
            thermal: THERMAL_WEIGHT,
            altitude: ALTITUDE_WEIGHT,
        }
    }
}

impl ScoreWeights {
    fn as_pairs(&self) -> [(&'static str, f64); 6] {
        [
            ("crowd_density", self.crowd_density),
            ("movement_compression", self.movement_compression),
            ("noise_level", self.noise_level),
            ("anomaly", self.anomaly),
            ("thermal", self.thermal),
            ("altitude", self.altitude),
        ]
    }
}

/// Thresholds that add points to the score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreTier {
    pub thermal_max: f64,
    pub thermal_max_points: f64,
    pub thermal_variance: f64,
    pub thermal_variance_points: f64,
    pub altitude_variance_scale: f64,
}

impl Default for ScoreTier {
    fn default() -> Self {
        Self {
            thermal_max: SCORE_THERMAL_MAX,
            thermal_max_points: SCORE_THERMAL_MAX_POINTS,
            thermal_variance: SCORE_THERMAL_VARIANCE,
            thermal_variance_points: SCORE_THERMAL_VARIANCE_POINTS,
            altitude_variance_scale: ALTITUDE_VARIANCE_SCALE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelThresholds {
    pub elevated_min: u8,
    pub critical_min: u8,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            elevated_min: ELEVATED_THRESHOLD,
            critical_min: CRITICAL_THRESHOLD,
        }
    }
}

/// Hard alert thresholds (strictly greater than fires)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertThresholds {
    pub thermal_max: f64,
    pub thermal_variance: f64,
    pub altitude_variance: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            thermal_max: ALERT_THERMAL_MAX,
            thermal_variance: ALERT_THERMAL_VARIANCE,
            altitude_variance: ALERT_ALTITUDE_VARIANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteBands {
    pub delayed_min: i32,
    pub reroute_min: i32,
}

impl Default for RouteBands {
    fn default() -> Self {
        Self {
            delayed_min: ROUTE_DELAYED_THRESHOLD,
            reroute_min: ROUTE_REROUTE_THRESHOLD,
        }
    }
}

/// Full engine configuration. Defaults reproduce the fielded rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub weights: ScoreWeights,
    pub score_tier: ScoreTier,
    pub night_bonus: u8,
    pub levels: LevelThresholds,
    pub alerts: AlertThresholds,
    pub routes: RouteBands,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            score_tier: ScoreTier::default(),
            night_bonus: NIGHT_BONUS,
            levels: LevelThresholds::default(),
            alerts: AlertThresholds::default(),
            routes: RouteBands::default(),
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file; missing fields fall back to defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let file = File::open(path.as_ref())?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would break the score or band invariants
    pub fn validate(&self) -> EngineResult<()> {
        for (name, weight) in self.weights.as_pairs() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "weight `{}` must be finite and >= 0, got {}",
                    name, weight
                )));
            }
        }

        let tier = &self.score_tier;
        let alerts = &self.alerts;
        let floats = [
            ("score_tier.thermal_max", tier.thermal_max),
            ("score_tier.thermal_max_points", tier.thermal_max_points),
            ("score_tier.thermal_variance", tier.thermal_variance),
            ("score_tier.thermal_variance_points", tier.thermal_variance_points),
            ("score_tier.altitude_variance_scale", tier.altitude_variance_scale),
            ("alerts.thermal_max", alerts.thermal_max),
            ("alerts.thermal_variance", alerts.thermal_variance),
            ("alerts.altitude_variance", alerts.altitude_variance),
        ];
        if let Some((name, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::InvalidConfig(format!(
                "`{}` must be finite, got {}",
                name, value
            )));
        }

        if tier.thermal_max_points < 0.0
            || tier.thermal_variance_points < 0.0
            || tier.altitude_variance_scale < 0.0
        {
            return Err(EngineError::InvalidConfig(
                "score tier points and scale must be >= 0".to_string(),
            ));
        }

        if self.night_bonus > MAX_SCORE {
            return Err(EngineError::InvalidConfig(format!(
                "night_bonus must be <= {}, got {}",
                MAX_SCORE, self.night_bonus
            )));
        }

        let levels = &self.levels;
        if levels.elevated_min >= levels.critical_min || levels.critical_min > MAX_SCORE {
            return Err(EngineError::InvalidConfig(format!(
                "level thresholds must satisfy elevated_min < critical_min <= {}, got {} / {}",
                MAX_SCORE, levels.elevated_min, levels.critical_min
            )));
        }

        let routes = &self.routes;
        if routes.delayed_min < 0 || routes.delayed_min >= routes.reroute_min {
            return Err(EngineError::InvalidConfig(format!(
                "route bands must satisfy 0 <= delayed_min < reroute_min, got {} / {}",
                routes.delayed_min, routes.reroute_min
            )));
        }

        Ok(())
    }
}
