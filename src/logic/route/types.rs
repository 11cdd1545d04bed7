//! Route Types
//!
//! KHÔNG chứa logic chọn route - chỉ data structures.

use serde::{Deserialize, Serialize};

/// Decision sentinel when every route must be rerouted
pub const ALL_ROUTES_BLOCKED: &str = "ALL ROUTES BLOCKED";

// ============================================================================
// ROUTE IDENTITY
// ============================================================================

/// Fixed route identities. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RouteId {
    #[serde(rename = "Route A")]
    A,
    #[serde(rename = "Route B")]
    B,
    #[serde(rename = "Route C")]
    C,
}

impl RouteId {
    pub const ALL: [RouteId; 3] = [RouteId::A, RouteId::B, RouteId::C];

    pub fn name(&self) -> &'static str {
        match self {
            RouteId::A => "Route A",
            RouteId::B => "Route B",
            RouteId::C => "Route C",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// ROUTE STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteState {
    /// Congestion < 40
    Safe,
    /// 40 <= congestion < 70
    Delayed,
    /// Congestion >= 70
    Reroute,
}

impl RouteState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteState::Safe => "SAFE",
            RouteState::Delayed => "DELAYED",
            RouteState::Reroute => "REROUTE",
        }
    }
}

impl std::fmt::Display for RouteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStatus {
    pub state: RouteState,
    /// Copy of the input congestion
    pub congestion: i32,
}

// ============================================================================
// ROUTE TABLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub route: RouteId,
    #[serde(flatten)]
    pub status: RouteStatus,
}

/// Exactly three routes in A, B, C order. Serialized as an ordered list;
/// deserializing any other order or count is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<RouteEntry>", try_from = "Vec<RouteEntry>")]
pub struct RouteTable([RouteEntry; 3]);

impl RouteTable {
    /// Build from statuses given in A, B, C order
    pub fn new(statuses: [RouteStatus; 3]) -> Self {
        let [a, b, c] = statuses;
        Self([
            RouteEntry { route: RouteId::A, status: a },
            RouteEntry { route: RouteId::B, status: b },
            RouteEntry { route: RouteId::C, status: c },
        ])
    }

    pub fn get(&self, route: RouteId) -> &RouteStatus {
        &self.0[route.index()].status
    }

    /// Entries in A, B, C order
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.0.iter()
    }

    pub fn all_in_state(&self, state: RouteState) -> bool {
        self.0.iter().all(|e| e.status.state == state)
    }
}

impl From<RouteTable> for Vec<RouteEntry> {
    fn from(table: RouteTable) -> Self {
        table.0.to_vec()
    }
}

impl TryFrom<Vec<RouteEntry>> for RouteTable {
    type Error = String;

    fn try_from(entries: Vec<RouteEntry>) -> Result<Self, Self::Error> {
        let order: Vec<RouteId> = entries.iter().map(|e| e.route).collect();
        if order != RouteId::ALL {
            return Err(format!(
                "routes must be exactly [Route A, Route B, Route C], got {:?}",
                order
            ));
        }
        Ok(Self::new([entries[0].status, entries[1].status, entries[2].status]))
    }
}

// ============================================================================
// FINAL DECISION
// ============================================================================

/// Selected operating route, or the all-blocked sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FinalDecision {
    Route(RouteId),
    AllRoutesBlocked,
}

impl FinalDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalDecision::Route(r) => r.name(),
            FinalDecision::AllRoutesBlocked => ALL_ROUTES_BLOCKED,
        }
    }

    pub fn route(&self) -> Option<RouteId> {
        match self {
            FinalDecision::Route(r) => Some(*r),
            FinalDecision::AllRoutesBlocked => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, FinalDecision::AllRoutesBlocked)
    }
}

impl std::fmt::Display for FinalDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<FinalDecision> for String {
    fn from(decision: FinalDecision) -> Self {
        decision.as_str().to_string()
    }
}

impl TryFrom<String> for FinalDecision {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == ALL_ROUTES_BLOCKED {
            return Ok(FinalDecision::AllRoutesBlocked);
        }
        RouteId::from_name(&value)
            .map(FinalDecision::Route)
            .ok_or_else(|| format!("unknown decision: {}", value))
    }
}
