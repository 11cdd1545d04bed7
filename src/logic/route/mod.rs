//! Route Module
//!
//! Phân loại congestion của từng route và chọn route vận hành.
//!
//! ## Structure
//! - `types`: RouteId, RouteState, RouteStatus, RouteTable, FinalDecision
//! - `selector`: classify / decide / choose logic

pub mod types;
pub mod selector;

pub use types::{ALL_ROUTES_BLOCKED, FinalDecision, RouteEntry, RouteId, RouteState, RouteStatus, RouteTable};

pub use selector::{
    classify_route,
    classify_route_with_bands,
    decide_routes,
    decide_routes_with_bands,
    choose_route,
};
