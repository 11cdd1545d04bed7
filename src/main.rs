//! Shield Decision Core - Main Entry Point
//!
//! Đọc một sensor snapshot (JSON file hoặc sample có sẵn), chạy một decision
//! cycle và in kết quả ra stdout dưới dạng JSON.

use anyhow::Context;

use shield_core::constants::{APP_NAME, APP_VERSION, DEFAULT_LOG_FILTER};
use shield_core::{AppConfig, DecisionEngine, EngineConfig, SensorInput};

/// Field sample used when no snapshot file is configured
fn sample_input() -> SensorInput {
    SensorInput {
        crowd_density: 68,
        movement_compression: 75,
        noise_level: 62,
        anomaly_flag: true,
        thermal_max: 52.3,
        thermal_variance: 11.4,
        night_mode: true,
        altitude_cm: 120,
        altitude_variance: 7.2,
        route_a_congestion: 88,
        route_b_congestion: 95,
        route_c_congestion: 46,
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    let config = AppConfig::from_env();

    let engine_config = match &config.engine_config_path {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = DecisionEngine::with_config(engine_config)?;

    let input = match &config.input_path {
        Some(path) => SensorInput::from_json_file(path)
            .with_context(|| format!("loading sensor snapshot from {}", path.display()))?,
        None => {
            log::info!("No snapshot configured - using built-in sample");
            sample_input()
        }
    };

    let output = engine.decide(&input).context("decision cycle failed")?;

    let json = if config.pretty_output {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}
