//! One full compute pass: uptake, then cost-benefit, then WTP.
//!
//! Results are assembled completely before they are returned, so renderers
//! and the report writer only ever see finished values.

use crate::coefficients::CoefficientTable;
use crate::config::ModelConfig;
use crate::cost_benefit::{compute_cost_benefit, CostBenefit, QalyScenario, TierCostTable};
use crate::scenario::Scenario;
use crate::uptake::{compute_uptake, UptakeNoise, UptakeResult};
use crate::wtp::{compute_wtp, scenario_wtp, WtpEntry};

/// Read-only inputs shared by every evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ModelContext<'a> {
    pub coefficients: &'a CoefficientTable,
    pub tiers: &'a TierCostTable,
    pub config: &'a ModelConfig,
}

/// Everything computed for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResults {
    pub scenario: Scenario,
    pub qaly_scenario: QalyScenario,
    pub uptake: UptakeResult,
    pub cost_benefit: CostBenefit,
    pub wtp: Vec<WtpEntry>,
    /// WTP of the scenario's discrete package over the reference package.
    pub package_wtp: f64,
}

pub fn evaluate_scenario(
    scenario: &Scenario,
    ctx: ModelContext<'_>,
    qaly_scenario: QalyScenario,
    noise: &mut dyn UptakeNoise,
) -> ScenarioResults {
    let uptake = compute_uptake(
        scenario,
        ctx.coefficients,
        ctx.config.continuous_mode,
        noise,
    );
    let cost_benefit = compute_cost_benefit(
        scenario,
        uptake.fraction,
        ctx.tiers,
        qaly_scenario,
        ctx.config,
    );
    ScenarioResults {
        scenario: *scenario,
        qaly_scenario,
        uptake,
        cost_benefit,
        wtp: compute_wtp(ctx.coefficients, ctx.config.wtp_scale),
        package_wtp: scenario_wtp(scenario, ctx.coefficients, ctx.config.wtp_scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{Accreditation, DeliveryMethod, Location, TrainingLevel};
    use crate::uptake::NoNoise;

    #[test]
    fn test_evaluate_matches_individual_engines() {
        let coefficients = CoefficientTable::default();
        let tiers = TierCostTable::default();
        let config = ModelConfig::default();
        let ctx = ModelContext {
            coefficients: &coefficients,
            tiers: &tiers,
            config: &config,
        };
        let scenario = Scenario {
            training_level: TrainingLevel::Intermediate,
            delivery_method: DeliveryMethod::Hybrid,
            accreditation: Accreditation::National,
            location: Location::RegionalCenters,
            cohort_size: 1500,
            cost_per_participant: 900.0,
        };

        let results = evaluate_scenario(&scenario, ctx, QalyScenario::Low, &mut NoNoise);

        let uptake = compute_uptake(&scenario, &coefficients, config.continuous_mode, &mut NoNoise);
        assert_eq!(results.uptake, uptake);
        assert_eq!(
            results.cost_benefit,
            compute_cost_benefit(&scenario, uptake.fraction, &tiers, QalyScenario::Low, &config)
        );
        assert_eq!(results.wtp, compute_wtp(&coefficients, config.wtp_scale));
        assert_eq!(results.scenario, scenario);
        assert_eq!(results.qaly_scenario, QalyScenario::Low);
        assert!(results.package_wtp > 0.0);
    }
}
