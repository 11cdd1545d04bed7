//! Sensor Types
//!
//! KHÔNG chứa logic scoring - chỉ data structure và loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

// ============================================================================
// SENSOR INPUT
// ============================================================================

/// One observation cycle, built by the acquisition layer.
///
/// Integer readings are signed so that a broken upstream (negative counts)
/// is caught by validation instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorInput {
    /// Crowd density, 0-100
    pub crowd_density: i32,
    /// Movement compression, 0-100
    pub movement_compression: i32,
    /// Noise level, 0-100
    pub noise_level: i32,
    /// Anomaly indicator computed upstream
    pub anomaly_flag: bool,

    /// Hottest pixel of the thermal frame (°C)
    pub thermal_max: f64,
    /// Variance of the thermal frame
    pub thermal_variance: f64,
    pub night_mode: bool,

    /// Carried through, not used by any rule
    pub altitude_cm: i32,
    pub altitude_variance: f64,

    pub route_a_congestion: i32,
    pub route_b_congestion: i32,
    pub route_c_congestion: i32,
}

impl SensorInput {
    /// Parse a snapshot from JSON text
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let file = File::open(path.as_ref())?;
        let input = serde_json::from_reader(BufReader::new(file))?;
        Ok(input)
    }

    /// Route congestions in fixed A, B, C order
    pub fn route_congestions(&self) -> [i32; 3] {
        [
            self.route_a_congestion,
            self.route_b_congestion,
            self.route_c_congestion,
        ]
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "crowd_density": 68,
        "movement_compression": 75,
        "noise_level": 62,
        "anomaly_flag": true,
        "thermal_max": 52.3,
        "thermal_variance": 11.4,
        "night_mode": true,
        "altitude_cm": 120,
        "altitude_variance": 7.2,
        "route_a_congestion": 88,
        "route_b_congestion": 95,
        "route_c_congestion": 46
    }"#;

    #[test]
    fn test_from_json_str() {
        let input = SensorInput::from_json_str(SNAPSHOT).unwrap();
        assert_eq!(input.crowd_density, 68);
        assert!(input.anomaly_flag);
        assert_eq!(input.altitude_cm, 120);
        assert_eq!(input.route_congestions(), [88, 95, 46]);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let input = SensorInput::from_json_file(file.path()).unwrap();
        assert_eq!(input.thermal_max, 52.3);
        assert!(input.night_mode);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SensorInput::from_json_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, crate::error::EngineError::Io(_)));
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let err = SensorInput::from_json_str(r#"{"crowd_density": 10}"#).unwrap_err();
        assert!(matches!(err, crate::error::EngineError::Json(_)));
    }
}
