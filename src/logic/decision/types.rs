//! Decision Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::route::{FinalDecision, RouteTable};
use crate::logic::threat::ThreatLevel;

/// Immutable result of one `decide()` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutput {
    /// Correlates log lines with the stored decision
    pub id: Uuid,
    /// 0-100
    pub threat_score: u8,
    pub threat_level: ThreatLevel,
    pub thermal_alert: bool,
    pub altitude_alert: bool,
    pub night_operation: bool,
    /// Always A, B, C
    pub routes: RouteTable,
    pub final_decision: FinalDecision,
    pub explanation: String,
    /// Seconds since Unix epoch
    pub timestamp: f64,
}

impl DecisionOutput {
    /// Timestamp as a `DateTime` (millisecond precision)
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis((self.timestamp * 1000.0) as i64)
    }

    pub fn has_alert(&self) -> bool {
        self.thermal_alert || self.altitude_alert
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
