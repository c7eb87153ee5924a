//! Utility and uptake engine.
//!
//! ## Model
//!
//! Utility of taking the program:
//!
//! ```text
//! U = ASC + Σ weight(selected level) + slope_cohort · x_cohort + slope_cost · x_cost
//! ```
//!
//! where `x` is either the raw input or its offset from a baseline, depending
//! on [`ContinuousMode`]. Uptake is the binary logit share against opting out:
//!
//! ```text
//! P = exp(U) / (exp(U) + exp(ASC_optout))
//! ```
//!
//! The displayed percentage is `100 · P` plus an optional cosmetic jitter,
//! clamped to `[0, 100]`. The jitter is never an error term.

mod noise;
mod utility;

pub use noise::{NoNoise, SeededJitter, UptakeNoise, UptakeNoiseSource};
pub use utility::{logit_share, utility};

use serde::{Deserialize, Serialize};

use crate::coefficients::CoefficientTable;
use crate::scenario::Scenario;

/// How cohort size and cost enter the utility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ContinuousMode {
    /// `slope × value`.
    Absolute,
    /// `slope × (value − baseline)`.
    OffsetFromBaseline { cohort_size: f64, cost: f64 },
}

/// Predicted uptake for one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UptakeResult {
    /// Logit probability of taking the program, in `[0, 1]`. Noise-free.
    pub fraction: f64,
    /// Display percentage in `[0, 100]`, including any cosmetic jitter.
    pub percent: f64,
}

impl UptakeResult {
    /// Advice shown next to the predicted uptake.
    pub fn recommendation(&self) -> &'static str {
        recommendation_for(self.percent)
    }
}

/// Advice band for a displayed uptake percentage.
pub fn recommendation_for(percent: f64) -> &'static str {
    if percent < 30.0 {
        "Uptake is low. Consider adjusting cost or other expansions."
    } else if percent < 70.0 {
        "Moderate uptake. Possibly refine the scenario to enhance acceptance."
    } else {
        "High uptake. This scenario is quite effective."
    }
}

/// Noise-free uptake probability.
pub fn uptake_fraction(scenario: &Scenario, coeffs: &CoefficientTable, mode: ContinuousMode) -> f64 {
    logit_share(utility(scenario, coeffs, mode), coeffs.asc_optout)
}

/// Uptake probability plus the clamped display percentage.
pub fn compute_uptake(
    scenario: &Scenario,
    coeffs: &CoefficientTable,
    mode: ContinuousMode,
    noise: &mut dyn UptakeNoise,
) -> UptakeResult {
    let fraction = uptake_fraction(scenario, coeffs, mode);
    let percent = (fraction * 100.0 + noise.perturbation()).clamp(0.0, 100.0);
    UptakeResult { fraction, percent }
}
