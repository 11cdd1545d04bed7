use crate::logic::route::FinalDecision;
use crate::logic::threat::ThreatLevel;

pub const CLAUSE_SEPARATOR: &str = " | ";

const THERMAL_CLAUSE: &str = "Thermal anomaly detected";
const ALTITUDE_CLAUSE: &str = "Altitude instability detected";
const NIGHT_CLAUSE: &str = "Night surveillance mode active";

/// Clauses in fixed order. Threat and Decision are always present, the
/// conditional ones are omitted when off.
pub fn explain_clauses(
    score: u8,
    level: ThreatLevel,
    thermal_alert: bool,
    altitude_alert: bool,
    night_mode: bool,
    decision: FinalDecision,
) -> Vec<String> {
    let mut parts = Vec::with_capacity(5);
    parts.push(format!("Threat={}({})", level, score));

    if thermal_alert {
        parts.push(THERMAL_CLAUSE.to_string());
    }
    if altitude_alert {
        parts.push(ALTITUDE_CLAUSE.to_string());
    }
    if night_mode {
        parts.push(NIGHT_CLAUSE.to_string());
    }

    parts.push(format!("Decision={}", decision));
    parts
}

/// e.g. `Threat=CRITICAL(81) | Thermal anomaly detected | Decision=Route C`
pub fn explain(
    score: u8,
    level: ThreatLevel,
    thermal_alert: bool,
    altitude_alert: bool,
    night_mode: bool,
    decision: FinalDecision,
) -> String {
    explain_clauses(score, level, thermal_alert, altitude_alert, night_mode, decision)
        .join(CLAUSE_SEPARATOR)
}
