//! Crowd risk features
//!
//! Stampede risk = density × σ²(v) × H(θ). Fused index là tổng có trọng số,
//! dùng cho dashboard - khác với threat score của engine.

use serde::{Deserialize, Serialize};

/// S = D × σ²(v) × H(θ)
pub fn stampede_risk(density: f64, speed_var: f64, dir_entropy: f64) -> f64 {
    density * speed_var * dir_entropy
}

/// Raw crowd features for one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CrowdFeatures {
    pub density: f64,
    pub stampede: f64,
    pub anomaly: f64,
    pub noise: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrowdIndexWeights {
    pub density: f64,
    pub stampede: f64,
    pub anomaly: f64,
    pub noise: f64,
}

impl Default for CrowdIndexWeights {
    fn default() -> Self {
        Self {
            density: 0.3,
            stampede: 0.4,
            anomaly: 0.2,
            noise: 0.1,
        }
    }
}

/// Σ wᵢ × featureᵢ
pub fn fused_crowd_index(features: &CrowdFeatures, weights: &CrowdIndexWeights) -> f64 {
    weights.density * features.density
        + weights.stampede * features.stampede
        + weights.anomaly * features.anomaly
        + weights.noise * features.noise
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stampede_zero_when_calm() {
        assert_eq!(stampede_risk(2.5, 0.0, 1.7), 0.0);
        assert!((stampede_risk(2.0, 0.5, 1.5) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_fused_index() {
        let f = CrowdFeatures { density: 10.0, stampede: 5.0, anomaly: 2.0, noise: 40.0 };
        // 3 + 2 + 0.4 + 4
        assert!((fused_crowd_index(&f, &CrowdIndexWeights::default()) - 9.4).abs() < 1e-9);
    }
}
