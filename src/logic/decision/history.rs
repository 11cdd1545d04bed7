//! Decision History - append-only, per engine instance
//!
//! Flow:
//! 1. Engine gọi `append_with` - stamp + push trong cùng một write lock
//! 2. Readers nhận snapshot copy, không chạm được vào log gốc

use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::types::DecisionOutput;
use crate::logic::threat::ThreatLevel;

// ============================================================================
// STATS
// ============================================================================

/// Aggregate view over the whole history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total: usize,
    pub nominal: usize,
    pub elevated: usize,
    pub critical: usize,
    pub thermal_alerts: usize,
    pub altitude_alerts: usize,
    pub night_operations: usize,
    pub all_routes_blocked: usize,
    pub last_timestamp: Option<f64>,
}

impl HistoryStats {
    fn record(&mut self, output: &DecisionOutput) {
        self.total += 1;
        match output.threat_level {
            ThreatLevel::Nominal => self.nominal += 1,
            ThreatLevel::Elevated => self.elevated += 1,
            ThreatLevel::Critical => self.critical += 1,
        }
        if output.thermal_alert {
            self.thermal_alerts += 1;
        }
        if output.altitude_alert {
            self.altitude_alerts += 1;
        }
        if output.night_operation {
            self.night_operations += 1;
        }
        if output.final_decision.is_blocked() {
            self.all_routes_blocked += 1;
        }
        self.last_timestamp = Some(output.timestamp);
    }
}

// ============================================================================
// HISTORY
// ============================================================================

#[derive(Debug, Default)]
pub struct DecisionHistory {
    entries: RwLock<Vec<DecisionOutput>>,
}

impl DecisionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp and append atomically.
    ///
    /// The timestamp passed to `build` is never earlier than the previous
    /// entry's, even if the wall clock steps backwards.
    pub(crate) fn append_with<F>(&self, build: F) -> DecisionOutput
    where
        F: FnOnce(f64) -> DecisionOutput,
    {
        let mut entries = self.entries.write();

        let now = unix_now();
        let timestamp = match entries.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };

        let output = build(timestamp);
        entries.push(output.clone());
        output
    }

    /// Copy of all decisions in insertion order
    pub fn snapshot(&self) -> Vec<DecisionOutput> {
        self.entries.read().clone()
    }

    pub fn latest(&self) -> Option<DecisionOutput> {
        self.entries.read().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn stats(&self) -> HistoryStats {
        let entries = self.entries.read();
        let mut stats = HistoryStats::default();
        for output in entries.iter() {
            stats.record(output);
        }
        stats
    }
}

/// Wall clock as fractional seconds since epoch
fn unix_now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
