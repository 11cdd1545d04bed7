//! Crowd Feature Helpers
//!
//! Các công thức dùng ở acquisition layer để tạo raw features từ camera /
//! microphone / thermal frame trước khi đóng gói thành `SensorInput`.
//! Engine KHÔNG gọi trực tiếp các hàm này.
//!
//! ## Structure
//! - `geometry`: ground area, density, per-person speed
//! - `stats`: variance, direction entropy, anomaly distance, noise dB
//! - `crowd`: stampede risk + fused crowd index

pub mod geometry;
pub mod stats;
pub mod crowd;
#[cfg(test)]
mod tests;

pub use geometry::{crowd_density, ground_area, person_speed};
pub use stats::{anomaly_distance, direction_entropy, noise_db, speed_variance, thermal_variance};
pub use crowd::{fused_crowd_index, stampede_risk, CrowdFeatures, CrowdIndexWeights};

/// Guard against division by ~0 and log(0)
pub const EPSILON: f64 = 1e-6;
