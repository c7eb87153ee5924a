//! Linear utility composition and the two-alternative logit transform.

use crate::attributes::ContinuousAttribute;
use crate::coefficients::CoefficientTable;
use crate::scenario::Scenario;

use super::ContinuousMode;

/// Utility of taking the program under `scenario`.
pub fn utility(scenario: &Scenario, coeffs: &CoefficientTable, mode: ContinuousMode) -> f64 {
    let (cohort, cost) = continuous_inputs(scenario, mode);
    coeffs.asc
        + coeffs.discrete_utility(scenario)
        + coeffs.slope(ContinuousAttribute::CohortSize) * cohort
        + coeffs.slope(ContinuousAttribute::Cost) * cost
}

fn continuous_inputs(scenario: &Scenario, mode: ContinuousMode) -> (f64, f64) {
    let cohort = scenario.cohort_size as f64;
    let cost = scenario.cost_per_participant;
    match mode {
        ContinuousMode::Absolute => (cohort, cost),
        ContinuousMode::OffsetFromBaseline {
            cohort_size,
            cost: cost_baseline,
        } => (cohort - cohort_size, cost - cost_baseline),
    }
}

/// Share of the "take" alternative with utility `u` against an opt-out with
/// utility `u_optout`.
///
/// Equivalent to `exp(u) / (exp(u) + exp(u_optout))`, written so that large
/// utilities saturate at 0 or 1 instead of producing `inf / inf`.
pub fn logit_share(u: f64, u_optout: f64) -> f64 {
    1.0 / (1.0 + (u_optout - u).exp())
}
