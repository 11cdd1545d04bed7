//! Statistical feature helpers

use std::f64::consts::PI;

use super::EPSILON;
use crate::error::{EngineError, EngineResult};

/// Histogram bins for direction entropy
const DIRECTION_BINS: usize = 8;

/// Population variance; 0 for empty input
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Variance of per-person speeds (panic indicator)
pub fn speed_variance(speeds: &[f64]) -> f64 {
    variance(speeds)
}

/// Variance of a flattened thermal frame (presence confidence)
pub fn thermal_variance(frame: &[f64]) -> f64 {
    variance(frame)
}

/// Shannon entropy of movement directions (radians), 8 bins over [-π, π].
///
/// Out-of-range angles are dropped; π falls into the last bin.
pub fn direction_entropy(directions: &[f64]) -> f64 {
    let width = 2.0 * PI / DIRECTION_BINS as f64;
    let mut hist = [0u32; DIRECTION_BINS];

    for &theta in directions {
        if !(-PI..=PI).contains(&theta) {
            continue;
        }
        let idx = (((theta + PI) / width) as usize).min(DIRECTION_BINS - 1);
        hist[idx] += 1;
    }

    let total: f64 = hist.iter().map(|&h| f64::from(h) + EPSILON).sum();
    -hist
        .iter()
        .map(|&h| {
            let p = f64::from(h) / total;
            p * (p + EPSILON).ln()
        })
        .sum::<f64>()
}

/// Euclidean distance of the current feature vector from its baseline
pub fn anomaly_distance(current: &[f64], baseline: &[f64]) -> EngineResult<f64> {
    if current.len() != baseline.len() {
        return Err(EngineError::FeatureMismatch {
            expected: baseline.len(),
            actual: current.len(),
        });
    }
    Ok(current
        .iter()
        .zip(baseline)
        .map(|(c, b)| (c - b).powi(2))
        .sum::<f64>()
        .sqrt())
}

/// RMS level in dB (agitation)
pub fn noise_db(samples: &[f64]) -> f64 {
    let rms = if samples.is_empty() {
        0.0
    } else {
        (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt()
    };
    20.0 * (rms + EPSILON).log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variance() {
        // mean 2.0, deviations 1,0,1 -> 2/3
        assert!((speed_variance(&[1.0, 2.0, 3.0]) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(thermal_variance(&[]), 0.0);
        assert_eq!(thermal_variance(&[36.6; 16]), 0.0);
    }

    #[test]
    fn test_entropy_uniform_vs_aligned() {
        let width = 2.0 * PI / 8.0;
        let spread: Vec<f64> = (0..8).map(|i| -PI + width * (i as f64 + 0.5)).collect();
        assert!((direction_entropy(&spread) - 8f64.ln()).abs() < 1e-3);

        let aligned = [0.3; 10];
        assert!(direction_entropy(&aligned).abs() < 1e-5);
    }

    #[test]
    fn test_entropy_edges() {
        // π lands in last bin, out-of-range ignored
        let with_edge = direction_entropy(&[PI, PI, 4.0, -4.0]);
        assert!(with_edge.abs() < 1e-5);
        assert!(direction_entropy(&[]).abs() < 1e-12);
    }

    #[test]
    fn test_anomaly_distance() {
        let d = anomaly_distance(&[3.0, 4.0, 1.0], &[0.0, 0.0, 1.0]).unwrap();
        assert!((d - 5.0).abs() < 1e-12);

        let err = anomaly_distance(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, EngineError::FeatureMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_noise_db() {
        // Unit amplitude -> ~0 dB
        assert!(noise_db(&[1.0, -1.0, 1.0, -1.0]).abs() < 1e-4);
        // Silence floors at -120 dB
        assert!((noise_db(&[0.0; 32]) + 120.0).abs() < 1e-9);
        assert!((noise_db(&[]) + 120.0).abs() < 1e-9);
    }
}
