//! Route Selector
//!
//! CHỈ chứa logic - congestion -> RouteStatus -> FinalDecision.

use super::types::{FinalDecision, RouteState, RouteStatus, RouteTable};
use crate::logic::sensor::SensorInput;
use crate::logic::threat::RouteBands;

// ============================================================================
// CLASSIFY
// ============================================================================

pub fn classify_route(congestion: i32) -> RouteStatus {
    classify_route_with_bands(congestion, &RouteBands::default())
}

pub fn classify_route_with_bands(congestion: i32, bands: &RouteBands) -> RouteStatus {
    let state = if congestion >= bands.reroute_min {
        RouteState::Reroute
    } else if congestion >= bands.delayed_min {
        RouteState::Delayed
    } else {
        RouteState::Safe
    };
    RouteStatus { state, congestion }
}

/// Classify all three routes in fixed A, B, C order
pub fn decide_routes(input: &SensorInput) -> RouteTable {
    decide_routes_with_bands(input, &RouteBands::default())
}

pub fn decide_routes_with_bands(input: &SensorInput, bands: &RouteBands) -> RouteTable {
    RouteTable::new(
        input
            .route_congestions()
            .map(|c| classify_route_with_bands(c, bands)),
    )
}

// ============================================================================
// CHOOSE
// ============================================================================

/// Pick the least congested route.
///
/// Ties go to the earliest route in A, B, C order. When every route must be
/// rerouted the result is `AllRoutesBlocked`.
pub fn choose_route(routes: &RouteTable) -> FinalDecision {
    if routes.all_in_state(RouteState::Reroute) {
        return FinalDecision::AllRoutesBlocked;
    }

    // min_by_key keeps the first of equal minimums
    routes
        .iter()
        .min_by_key(|entry| entry.status.congestion)
        .map(|entry| FinalDecision::Route(entry.route))
        .unwrap_or(FinalDecision::AllRoutesBlocked)
}

// ============================================================================
// TESTS
// ============================================================================
