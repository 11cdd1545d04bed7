//! Central Configuration Constants
//!
//! Single source of truth for app-level defaults and environment keys.
//! Rule thresholds live in `logic::threat::rules`.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Shield Decision Core";

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

// ============================================
// Environment keys
// ============================================

/// Optional path to a JSON `SensorInput` snapshot
pub const ENV_INPUT_PATH: &str = "SHIELD_INPUT_PATH";

/// Optional path to a JSON `EngineConfig`
pub const ENV_ENGINE_CONFIG: &str = "SHIELD_ENGINE_CONFIG";

/// Pretty-print JSON output (default: true)
pub const ENV_PRETTY_OUTPUT: &str = "SHIELD_PRETTY_OUTPUT";

// ============================================
// Helpers
// ============================================

/// Parse a boolean env flag: anything except "false"/"0" counts as enabled.
pub fn parse_flag(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v != "false" && v != "0"
}
