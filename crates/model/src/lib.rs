use bevy::prelude::*;

pub mod attributes;
pub mod calculator;
pub mod coefficients;
pub mod config;
pub mod cost_benefit;
pub mod error;
pub mod evaluation;
pub mod scenario;
pub mod scenario_book;
pub mod uptake;
pub mod wtp;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use calculator::CalculatorPlugin;
use coefficients::{load_config_file, CoefficientTable};
use config::{ModelConfig, CONFIG_ENV_VAR, JITTER_ENV_VAR, UPTAKE_NOISE_AMPLITUDE, UPTAKE_NOISE_SEED};
use cost_benefit::TierCostTable;
use scenario_book::ScenarioBook;
use uptake::UptakeNoiseSource;

/// Engines, configuration and calculator state.
///
/// Resources already present when the plugin is added are left alone, so
/// tests and embedders can insert their own coefficient table or noise
/// source first.
pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        let world = app.world();
        let configured = world.contains_resource::<CoefficientTable>()
            || world.contains_resource::<ModelConfig>();
        if !configured {
            let (coefficients, model_config) = configuration_from_env();
            app.insert_resource(coefficients).insert_resource(model_config);
        }
        if !app.world().contains_resource::<UptakeNoiseSource>() {
            app.insert_resource(noise_from_env());
        }

        app.init_resource::<CoefficientTable>()
            .init_resource::<ModelConfig>()
            .init_resource::<TierCostTable>()
            .init_resource::<ScenarioBook>()
            .add_plugins(CalculatorPlugin);
    }
}

/// Coefficients and model settings from the file named by `STEPS_CONFIG`,
/// falling back to the built-in defaults.
fn configuration_from_env() -> (CoefficientTable, ModelConfig) {
    let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
        return (CoefficientTable::default(), ModelConfig::default());
    };
    match load_config_file(&path) {
        Ok((coefficients, model_config)) => {
            info!("Loaded calculator configuration from {path}");
            (coefficients.unwrap_or_default(), model_config)
        }
        Err(e) => {
            error!("Ignoring calculator configuration {path}: {e}");
            (CoefficientTable::default(), ModelConfig::default())
        }
    }
}

fn noise_from_env() -> UptakeNoiseSource {
    match std::env::var(JITTER_ENV_VAR) {
        Ok(value) => noise_from_setting(&value).unwrap_or_else(|| {
            warn!("Unrecognised {JITTER_ENV_VAR} value '{value}', jitter stays off");
            UptakeNoiseSource::default()
        }),
        Err(_) => UptakeNoiseSource::default(),
    }
}

/// `on`/`true` for the default seed, a number for a specific seed, `off` or
/// empty for no jitter. `None` for anything else.
pub fn noise_from_setting(value: &str) -> Option<UptakeNoiseSource> {
    let value = value.trim();
    match value.to_ascii_lowercase().as_str() {
        "" | "off" | "false" => Some(UptakeNoiseSource::default()),
        "on" | "true" => Some(UptakeNoiseSource::seeded(
            UPTAKE_NOISE_SEED,
            UPTAKE_NOISE_AMPLITUDE,
        )),
        _ => value
            .parse::<u64>()
            .ok()
            .map(|seed| UptakeNoiseSource::seeded(seed, UPTAKE_NOISE_AMPLITUDE)),
    }
}
