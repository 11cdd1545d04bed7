//! Integration Tests for Crowd Feature Helpers
//!
//! Tests các helpers hoạt động đúng khi kết hợp thành một pipeline.

use std::f64::consts::PI;

use super::*;

/// Drone at 25 m, 78° FOV, 42 people in frame
#[test]
fn test_full_feature_pipeline() {
    let area = ground_area(25.0, 78f64.to_radians());
    assert!(area > 1500.0 && area < 1700.0, "area = {}", area);

    let density = crowd_density(42, area);
    assert!(density > 0.0 && density < 0.05);

    let speeds = [1.2, 0.8, 2.3, 1.9, 3.1];
    let speed_var = speed_variance(&speeds);
    assert!(speed_var > 0.0);

    let directions = [0.2, -1.1, 1.5, 2.8, -2.4];
    let entropy = direction_entropy(&directions);
    // 5 distinct bins -> close to ln 5
    assert!((entropy - 5f64.ln()).abs() < 1e-3);

    let stampede = stampede_risk(density, speed_var, entropy);
    assert!(stampede > 0.0);

    let frame: Vec<f64> = (0..64).map(|i| (i % 8) as f64 * 5.0).collect();
    let thermal_var = thermal_variance(&frame);
    assert!(thermal_var > 0.0);

    let anomaly = anomaly_distance(&[density, speed_var, thermal_var], &[0.3, 0.1, 5.0]).unwrap();
    assert!(anomaly > 0.0);

    let audio: Vec<f64> = (0..2048).map(|i| (i as f64 * 0.05).sin() * 0.5).collect();
    let noise = noise_db(&audio);
    assert!(noise < 0.0 && noise > -20.0);

    let index = fused_crowd_index(
        &CrowdFeatures { density, stampede, anomaly, noise },
        &CrowdIndexWeights::default(),
    );
    assert!(index.is_finite());
}

/// Panic pattern (fast, scattered) outranks calm flow (slow, aligned)
#[test]
fn test_panic_raises_stampede_risk() {
    let density = 2.0;

    let calm_speeds = [1.0, 1.1, 0.9, 1.0];
    let calm_dirs = [0.1, 0.15, 0.12, 0.1];
    let calm = stampede_risk(density, speed_variance(&calm_speeds), direction_entropy(&calm_dirs));

    let panic_speeds = [0.5, 3.5, 1.0, 4.2];
    let panic_dirs = [-PI + 0.1, -1.0, 1.0, PI - 0.1];
    let panic = stampede_risk(density, speed_variance(&panic_speeds), direction_entropy(&panic_dirs));

    assert!(panic > calm);
}
