//! Cost-benefit engine.
//!
//! Totals scale the per-tier unit cost and unit benefit by cohort size:
//!
//! ```text
//! total_cost    = unit_cost    × cohort_size
//! total_benefit = unit_benefit × cohort_size
//! net_benefit   = total_benefit − total_cost
//! ```
//!
//! QALY figures are reported alongside and do not feed the net benefit:
//!
//! ```text
//! participants      = uptake_fraction × reference_cohort
//! total_qalys       = participants × qaly_per_participant
//! monetized_benefit = total_qalys × value_per_qaly
//! ```
//!
//! Cost per participant mixes the two bases: the cohort-scaled
//! `total_cost` divided by the reference-cohort `participants`. It is a
//! whole-program cost per expected enrolee of the reference cohort, not the
//! cost-per-participant input.

use bevy::prelude::*;

use crate::attributes::{LevelTable, TrainingLevel};
use crate::config::ModelConfig;
use crate::scenario::Scenario;

/// Unit cost and unit benefit for one training tier, in dollars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierEconomics {
    pub unit_cost: f64,
    pub unit_benefit: f64,
}

/// Cost and benefit placeholders per training level.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TierCostTable(pub LevelTable<TrainingLevel, TierEconomics>);

impl Default for TierCostTable {
    fn default() -> Self {
        Self(LevelTable::from_fn(|level| match level {
            TrainingLevel::Frontline => TierEconomics {
                unit_cost: 250_000.0,
                unit_benefit: 800_000.0,
            },
            TrainingLevel::Intermediate => TierEconomics {
                unit_cost: 450_000.0,
                unit_benefit: 1_400_000.0,
            },
            TrainingLevel::Advanced => TierEconomics {
                unit_cost: 650_000.0,
                unit_benefit: 2_000_000.0,
            },
        }))
    }
}

impl TierCostTable {
    pub fn tier(&self, level: TrainingLevel) -> TierEconomics {
        *self.0.get(level)
    }
}

/// Assumed QALY gain per participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QalyScenario {
    Low,
    #[default]
    Moderate,
    High,
}

impl QalyScenario {
    pub const ALL: [QalyScenario; 3] = [QalyScenario::Low, QalyScenario::Moderate, QalyScenario::High];

    pub fn qaly_per_participant(self) -> f64 {
        match self {
            QalyScenario::Low => 0.01,
            QalyScenario::Moderate => 0.05,
            QalyScenario::High => 0.08,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QalyScenario::Low => "Low (0.01 QALY)",
            QalyScenario::Moderate => "Moderate (0.05 QALY)",
            QalyScenario::High => "High (0.08 QALY)",
        }
    }
}

/// Cost-benefit summary for one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBenefit {
    pub total_cost: f64,
    pub total_benefit: f64,
    /// `total_benefit − total_cost`; may be negative.
    pub net_benefit: f64,
    pub participants: f64,
    pub total_qalys: f64,
    pub monetized_benefit: f64,
}

impl CostBenefit {
    /// Cohort-scaled total cost over reference-cohort participants, or `None`
    /// when nobody takes part.
    pub fn cost_per_participant(&self) -> Option<f64> {
        if self.participants > 0.0 {
            Some(self.total_cost / self.participants)
        } else {
            None
        }
    }
}

/// Cost, benefit and QALY figures for `scenario` given its uptake fraction.
pub fn compute_cost_benefit(
    scenario: &Scenario,
    uptake_fraction: f64,
    tiers: &TierCostTable,
    qaly: QalyScenario,
    config: &ModelConfig,
) -> CostBenefit {
    let tier = tiers.tier(scenario.training_level);
    let cohort = scenario.cohort_size as f64;
    let total_cost = tier.unit_cost * cohort;
    let total_benefit = tier.unit_benefit * cohort;

    let participants = uptake_fraction.clamp(0.0, 1.0) * config.reference_cohort;
    let total_qalys = participants * qaly.qaly_per_participant();

    CostBenefit {
        total_cost,
        total_benefit,
        net_benefit: total_benefit - total_cost,
        participants,
        total_qalys,
        monetized_benefit: total_qalys * config.value_per_qaly,
    }
}
