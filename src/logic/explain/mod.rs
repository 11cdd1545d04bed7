//! Explain Module
//!
//! Render một decision thành chuỗi chẩn đoán cho operator.

pub mod engine;

pub use engine::{explain, explain_clauses, CLAUSE_SEPARATOR};
