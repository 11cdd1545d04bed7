//! Decision Engine
//!
//! CHỈ chứa orchestration - logic nằm trong threat / route / explain.
//! Input: SensorInput
//! Output: DecisionOutput (+ history append)

use uuid::Uuid;

use super::history::{DecisionHistory, HistoryStats};
use super::types::DecisionOutput;
use crate::error::EngineResult;
use crate::logic::explain::explain;
use crate::logic::route::{choose_route, decide_routes_with_bands};
use crate::logic::sensor::{validate_input, SensorInput};
use crate::logic::threat::{
    classify_threat_with_thresholds, detect_altitude_instability_with_thresholds,
    detect_thermal_alert_with_thresholds, score_breakdown, EngineConfig, ThreatLevel,
};

/// Rule-based decision engine. Owns its history; safe to share across threads.
#[derive(Debug, Default)]
pub struct DecisionEngine {
    config: EngineConfig,
    history: DecisionHistory,
}

impl DecisionEngine {
    /// Engine with the default rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom, validated config
    pub fn with_config(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            history: DecisionHistory::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // DECIDE
    // ========================================================================

    /// Run one full decision cycle and append it to history.
    ///
    /// Invalid snapshots are rejected before scoring and nothing is appended.
    pub fn decide(&self, input: &SensorInput) -> EngineResult<DecisionOutput> {
        if let Err(e) = validate_input(input) {
            log::warn!("Rejected sensor snapshot: {}", e);
            return Err(e);
        }

        let config = &self.config;

        let breakdown = score_breakdown(input, config);
        let score = breakdown.final_score;
        let level = classify_threat_with_thresholds(score, &config.levels);

        let thermal_alert = detect_thermal_alert_with_thresholds(input, &config.alerts);
        let altitude_alert = detect_altitude_instability_with_thresholds(input, &config.alerts);

        let routes = decide_routes_with_bands(input, &config.routes);
        let decision = choose_route(&routes);

        let explanation = explain(
            score,
            level,
            thermal_alert,
            altitude_alert,
            input.night_mode,
            decision,
        );

        log::debug!(
            "Score breakdown: base={:.2} anomaly={} thermal={} altitude={} night_bonus={}",
            breakdown.weighted_base,
            breakdown.anomaly_component,
            breakdown.thermal_component,
            breakdown.altitude_component,
            breakdown.night_bonus
        );

        let output = self.history.append_with(|timestamp| DecisionOutput {
            id: Uuid::new_v4(),
            threat_score: score,
            threat_level: level,
            thermal_alert,
            altitude_alert,
            night_operation: input.night_mode,
            routes,
            final_decision: decision,
            explanation,
            timestamp,
        });

        if level == ThreatLevel::Critical || decision.is_blocked() {
            log::warn!("Decision {}: {}", output.id, output.explanation);
        } else {
            log::info!("Decision {}: {}", output.id, output.explanation);
        }

        Ok(output)
    }

    // ========================================================================
    // HISTORY ACCESS
    // ========================================================================

    /// All prior decisions in insertion order (copy)
    pub fn history(&self) -> Vec<DecisionOutput> {
        self.history.snapshot()
    }

    pub fn latest(&self) -> Option<DecisionOutput> {
        self.history.latest()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn stats(&self) -> HistoryStats {
        self.history.stats()
    }
}
