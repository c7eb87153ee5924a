//! Coefficient table for the binary logit uptake model.
//!
//! Weights are fixed literature-derived constants rather than fitted values.
//! The defaults can be replaced at startup from a JSON file (see [`file`]).

pub mod file;
mod tests;

use bevy::prelude::*;

use crate::attributes::{
    Accreditation, AttributeLevel, ContinuousAttribute, DeliveryMethod, LevelTable, LevelWeights,
    Location, TrainingLevel,
};
use crate::error::ModelError;
use crate::scenario::Scenario;

pub use file::{load_config_file, CalculatorConfigFile, CoefficientFile};

/// Utility weights for every attribute level, continuous slopes, and the two
/// alternative-specific constants.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    /// Constant for the "take the program" alternative.
    pub asc: f64,
    /// Constant for the "opt out" alternative.
    pub asc_optout: f64,
    pub training_level: LevelWeights<TrainingLevel>,
    pub delivery_method: LevelWeights<DeliveryMethod>,
    pub accreditation: LevelWeights<Accreditation>,
    pub location: LevelWeights<Location>,
    /// Utility change per additional cohort member.
    pub cohort_size_slope: f64,
    /// Utility change per additional dollar of cost. Must be negative.
    pub cost_slope: f64,
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self {
            asc: 1.0,
            asc_optout: 0.3,
            training_level: LevelTable::from_fn(|level| match level {
                TrainingLevel::Frontline => 0.6,
                TrainingLevel::Intermediate => 0.3,
                TrainingLevel::Advanced => 0.0,
            }),
            delivery_method: LevelTable::from_fn(|level| match level {
                DeliveryMethod::InPerson => 0.5,
                DeliveryMethod::Online => 0.0,
                DeliveryMethod::Hybrid => 0.4,
            }),
            accreditation: LevelTable::from_fn(|level| match level {
                Accreditation::National => 0.4,
                Accreditation::International => 0.8,
                Accreditation::None => 0.0,
            }),
            location: LevelTable::from_fn(|level| match level {
                Location::StateLevel => 0.3,
                Location::RegionalCenters => 0.2,
                Location::DistrictLevel => 0.0,
            }),
            cohort_size_slope: -0.0008,
            cost_slope: -0.0001,
        }
    }
}

/// Attribute levels whose weights live in a [`CoefficientTable`].
pub trait WeightedAttribute: AttributeLevel {
    fn weights(table: &CoefficientTable) -> &LevelWeights<Self>;
    fn weights_mut(table: &mut CoefficientTable) -> &mut LevelWeights<Self>;
}

impl WeightedAttribute for TrainingLevel {
    fn weights(table: &CoefficientTable) -> &LevelWeights<Self> {
        &table.training_level
    }
    fn weights_mut(table: &mut CoefficientTable) -> &mut LevelWeights<Self> {
        &mut table.training_level
    }
}

impl WeightedAttribute for DeliveryMethod {
    fn weights(table: &CoefficientTable) -> &LevelWeights<Self> {
        &table.delivery_method
    }
    fn weights_mut(table: &mut CoefficientTable) -> &mut LevelWeights<Self> {
        &mut table.delivery_method
    }
}

impl WeightedAttribute for Accreditation {
    fn weights(table: &CoefficientTable) -> &LevelWeights<Self> {
        &table.accreditation
    }
    fn weights_mut(table: &mut CoefficientTable) -> &mut LevelWeights<Self> {
        &mut table.accreditation
    }
}

impl WeightedAttribute for Location {
    fn weights(table: &CoefficientTable) -> &LevelWeights<Self> {
        &table.location
    }
    fn weights_mut(table: &mut CoefficientTable) -> &mut LevelWeights<Self> {
        &mut table.location
    }
}

impl CoefficientTable {
    /// Weight of a single level.
    pub fn weight<L: WeightedAttribute>(&self, level: L) -> f64 {
        *L::weights(self).get(level)
    }

    /// Weight of `level` relative to its attribute's reference level.
    pub fn weight_difference<L: WeightedAttribute>(&self, level: L) -> f64 {
        L::weights(self).relative_to_reference(level)
    }

    /// Slope for a continuous attribute.
    pub fn slope(&self, attribute: ContinuousAttribute) -> f64 {
        match attribute {
            ContinuousAttribute::CohortSize => self.cohort_size_slope,
            ContinuousAttribute::Cost => self.cost_slope,
        }
    }

    /// Sum of the discrete level weights a scenario selects.
    pub fn discrete_utility(&self, scenario: &Scenario) -> f64 {
        self.weight(scenario.training_level)
            + self.weight(scenario.delivery_method)
            + self.weight(scenario.accreditation)
            + self.weight(scenario.location)
    }

    /// Check that every value is finite and the cost slope is negative.
    pub fn validate(&self) -> Result<(), ModelError> {
        let scalars = [
            ("ASC", self.asc),
            ("ASC_optout", self.asc_optout),
            ("CohortSizeSlope", self.cohort_size_slope),
            ("CostSlope", self.cost_slope),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ModelError::InvalidCoefficient { name, value });
            }
        }
        check_finite(&self.training_level)?;
        check_finite(&self.delivery_method)?;
        check_finite(&self.accreditation)?;
        check_finite(&self.location)?;

        if self.cost_slope >= 0.0 {
            return Err(ModelError::InvalidCoefficient {
                name: "CostSlope",
                value: self.cost_slope,
            });
        }
        Ok(())
    }
}

fn check_finite<L: AttributeLevel>(weights: &LevelWeights<L>) -> Result<(), ModelError> {
    match weights.iter().find(|(_, w)| !w.is_finite()) {
        Some((level, &value)) => Err(ModelError::InvalidCoefficient {
            name: level.label(),
            value,
        }),
        None => Ok(()),
    }
}
