//! Constants and runtime configuration for the uptake, cost-benefit and WTP
//! engines.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::uptake::ContinuousMode;

/// Smallest cohort the inputs accept.
pub const COHORT_SIZE_MIN: u32 = 500;
/// Largest cohort the inputs accept.
pub const COHORT_SIZE_MAX: u32 = 2000;
/// Initial cohort size shown in the inputs.
pub const COHORT_SIZE_DEFAULT: u32 = 500;

/// Cost per participant at slider index 0, in dollars.
pub const COST_MIN: f64 = 60.0;
/// Cost per participant at the last slider index, in dollars.
pub const COST_MAX: f64 = 1500.0;
/// Last cost slider index (the slider runs over `0..=COST_SLIDER_MAX`).
pub const COST_SLIDER_MAX: u32 = 250;
/// Initial cost slider index.
pub const COST_SLIDER_DEFAULT: u32 = 0;

/// Scale applied to raw utility/cost ratios so WTP lands in a readable
/// currency magnitude. Other observed conventions are 10_000 and 100_000.
pub const WTP_SCALE: f64 = 1000.0;

/// Fraction of |WTP| reported as the standard error. Illustrative only: it is
/// not derived from any sampling variance.
pub const WTP_STANDARD_ERROR_FRACTION: f64 = 0.1;

/// Cohort that the uptake fraction is applied to when counting participants
/// for the QALY figures.
pub const REFERENCE_COHORT: f64 = 250.0;

/// Dollar value of one quality-adjusted life year.
pub const VALUE_PER_QALY: f64 = 50_000.0;

/// Default half-width of the cosmetic uptake jitter, in percentage points.
/// The jitter is off unless a seeded noise source is installed.
pub const UPTAKE_NOISE_AMPLITUDE: f64 = 3.0;

/// Default seed for the cosmetic uptake jitter.
pub const UPTAKE_NOISE_SEED: u64 = 42;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "STEPS_CONFIG";

/// Environment variable that turns on the cosmetic uptake jitter. Holds a
/// numeric seed, or `on` for [`UPTAKE_NOISE_SEED`].
pub const JITTER_ENV_VAR: &str = "STEPS_UPTAKE_JITTER";

// =============================================================================
// Runtime configuration
// =============================================================================

/// Engine settings that vary between model variants.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Whether continuous attributes enter utility raw or as offsets.
    pub continuous_mode: ContinuousMode,
    /// Multiplier applied to every WTP ratio.
    pub wtp_scale: f64,
    /// Cohort the uptake fraction is applied to for the QALY figures.
    pub reference_cohort: f64,
    /// Dollar value of one QALY.
    pub value_per_qaly: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            continuous_mode: ContinuousMode::Absolute,
            wtp_scale: WTP_SCALE,
            reference_cohort: REFERENCE_COHORT,
            value_per_qaly: VALUE_PER_QALY,
        }
    }
}

/// Map a cost slider index onto a dollar amount.
pub fn cost_from_slider(index: u32) -> f64 {
    COST_MIN + (COST_MAX - COST_MIN) / COST_SLIDER_MAX as f64 * index as f64
}

/// Inverse of [`cost_from_slider`], rounded to the nearest index and clamped
/// to the slider range.
pub fn slider_from_cost(cost: f64) -> u32 {
    let step = (COST_MAX - COST_MIN) / COST_SLIDER_MAX as f64;
    let index = ((cost - COST_MIN) / step).round();
    index.clamp(0.0, COST_SLIDER_MAX as f64) as u32
}
