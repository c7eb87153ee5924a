//! Scenario records and the input draft they are built from.
//!
//! A `Scenario` is rebuilt from the current draft every time results are
//! requested and is never edited afterwards.

use crate::attributes::{
    Accreditation, Attribute, AttributeLevel, DeliveryMethod, Location, TrainingLevel,
};
use crate::config::{
    cost_from_slider, slider_from_cost, COHORT_SIZE_DEFAULT, COHORT_SIZE_MAX, COHORT_SIZE_MIN,
    COST_MAX, COST_MIN, COST_SLIDER_DEFAULT, COST_SLIDER_MAX,
};
use crate::error::ModelError;

/// A complete, validated set of program choices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub training_level: TrainingLevel,
    pub delivery_method: DeliveryMethod,
    pub accreditation: Accreditation,
    pub location: Location,
    pub cohort_size: u32,
    /// Dollars per participant.
    pub cost_per_participant: f64,
}

impl Scenario {
    /// The scenario with every discrete attribute at its reference level.
    pub fn reference(cohort_size: u32, cost_per_participant: f64) -> Self {
        Self {
            training_level: TrainingLevel::REFERENCE,
            delivery_method: DeliveryMethod::REFERENCE,
            accreditation: Accreditation::REFERENCE,
            location: Location::REFERENCE,
            cohort_size,
            cost_per_participant,
        }
    }
}

/// How the cost per participant was entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostInput {
    /// Slider index in `0..=COST_SLIDER_MAX`, mapped affinely onto dollars.
    Slider(u32),
    /// Dollar amount typed in directly.
    Direct(f64),
}

impl CostInput {
    /// Dollar amount, without range checks.
    pub fn amount(self) -> f64 {
        match self {
            CostInput::Slider(index) => cost_from_slider(index),
            CostInput::Direct(amount) => amount,
        }
    }

    /// Slider position that best represents this input.
    pub fn slider_index(self) -> u32 {
        match self {
            CostInput::Slider(index) => index.min(COST_SLIDER_MAX),
            CostInput::Direct(amount) => slider_from_cost(amount),
        }
    }
}

/// The user's in-progress selections. Discrete attributes start unselected.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioDraft {
    pub training_level: Option<TrainingLevel>,
    pub delivery_method: Option<DeliveryMethod>,
    pub accreditation: Option<Accreditation>,
    pub location: Option<Location>,
    pub cohort_size: u32,
    pub cost: CostInput,
}

impl Default for ScenarioDraft {
    fn default() -> Self {
        Self {
            training_level: None,
            delivery_method: None,
            accreditation: None,
            location: None,
            cohort_size: COHORT_SIZE_DEFAULT,
            cost: CostInput::Slider(COST_SLIDER_DEFAULT),
        }
    }
}

impl ScenarioDraft {
    /// Draft that reproduces a saved scenario. Cost goes back on the slider
    /// when a slider position gives exactly that amount, otherwise it is kept
    /// as a direct entry.
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let cost = scenario.cost_per_participant;
        let index = slider_from_cost(cost);
        Self {
            training_level: Some(scenario.training_level),
            delivery_method: Some(scenario.delivery_method),
            accreditation: Some(scenario.accreditation),
            location: Some(scenario.location),
            cohort_size: scenario.cohort_size,
            cost: if cost_from_slider(index) == cost {
                CostInput::Slider(index)
            } else {
                CostInput::Direct(cost)
            },
        }
    }

    /// Attributes that still have no selection, in declaration order.
    pub fn missing_selections(&self) -> Vec<Attribute> {
        let selected = [
            self.training_level.is_some(),
            self.delivery_method.is_some(),
            self.accreditation.is_some(),
            self.location.is_some(),
        ];
        Attribute::ALL
            .into_iter()
            .zip(selected)
            .filter(|(_, is_set)| !is_set)
            .map(|(attribute, _)| attribute)
            .collect()
    }

    /// Validate the draft into a scenario.
    ///
    /// Missing selections are rejected, never defaulted.
    pub fn build(&self) -> Result<Scenario, ModelError> {
        let training_level = self
            .training_level
            .ok_or(ModelError::MissingSelection(Attribute::TrainingLevel))?;
        let delivery_method = self
            .delivery_method
            .ok_or(ModelError::MissingSelection(Attribute::DeliveryMethod))?;
        let accreditation = self
            .accreditation
            .ok_or(ModelError::MissingSelection(Attribute::Accreditation))?;
        let location = self
            .location
            .ok_or(ModelError::MissingSelection(Attribute::Location))?;

        if !(COHORT_SIZE_MIN..=COHORT_SIZE_MAX).contains(&self.cohort_size) {
            return Err(ModelError::OutOfRange {
                field: "Cohort size",
                value: self.cohort_size as f64,
                min: COHORT_SIZE_MIN as f64,
                max: COHORT_SIZE_MAX as f64,
            });
        }

        let cost_per_participant = match self.cost {
            CostInput::Slider(index) if index > COST_SLIDER_MAX => {
                return Err(ModelError::OutOfRange {
                    field: "Cost slider",
                    value: index as f64,
                    min: 0.0,
                    max: COST_SLIDER_MAX as f64,
                });
            }
            CostInput::Direct(amount) if !(COST_MIN..=COST_MAX).contains(&amount) => {
                return Err(ModelError::OutOfRange {
                    field: "Cost per participant",
                    value: amount,
                    min: COST_MIN,
                    max: COST_MAX,
                });
            }
            input => input.amount(),
        };

        Ok(Scenario {
            training_level,
            delivery_method,
            accreditation,
            location,
            cohort_size: self.cohort_size,
            cost_per_participant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ScenarioDraft {
        ScenarioDraft {
            training_level: Some(TrainingLevel::Frontline),
            delivery_method: Some(DeliveryMethod::InPerson),
            accreditation: Some(Accreditation::International),
            location: Some(Location::StateLevel),
            cohort_size: 1000,
            cost: CostInput::Direct(500.0),
        }
    }

    #[test]
    fn test_default_draft_has_no_selections() {
        let draft = ScenarioDraft::default();
        assert_eq!(draft.missing_selections(), Attribute::ALL.to_vec());
        assert!(matches!(
            draft.build(),
            Err(ModelError::MissingSelection(Attribute::TrainingLevel))
        ));
    }

    #[test]
    fn test_build_reports_first_missing_selection() {
        let mut draft = complete_draft();
        draft.accreditation = None;
        draft.location = None;
        assert_eq!(
            draft.missing_selections(),
            vec![Attribute::Accreditation, Attribute::Location]
        );
        assert!(matches!(
            draft.build(),
            Err(ModelError::MissingSelection(Attribute::Accreditation))
        ));
    }

    #[test]
    fn test_build_complete_draft() {
        let scenario = complete_draft().build().unwrap();
        assert_eq!(scenario.training_level, TrainingLevel::Frontline);
        assert_eq!(scenario.cohort_size, 1000);
        assert_eq!(scenario.cost_per_participant, 500.0);
    }

    #[test]
    fn test_build_rejects_cohort_out_of_range() {
        let mut draft = complete_draft();
        draft.cohort_size = 499;
        assert!(matches!(draft.build(), Err(ModelError::OutOfRange { .. })));
        draft.cohort_size = 2001;
        assert!(matches!(draft.build(), Err(ModelError::OutOfRange { .. })));
        draft.cohort_size = 2000;
        assert!(draft.build().is_ok());
    }

    #[test]
    fn test_build_rejects_cost_out_of_range() {
        let mut draft = complete_draft();
        draft.cost = CostInput::Direct(59.99);
        assert!(matches!(draft.build(), Err(ModelError::OutOfRange { .. })));
        draft.cost = CostInput::Direct(f64::NAN);
        assert!(matches!(draft.build(), Err(ModelError::OutOfRange { .. })));
        draft.cost = CostInput::Slider(COST_SLIDER_MAX + 1);
        assert!(matches!(draft.build(), Err(ModelError::OutOfRange { .. })));
    }

    #[test]
    fn test_slider_cost_is_mapped() {
        let mut draft = complete_draft();
        draft.cost = CostInput::Slider(COST_SLIDER_MAX);
        let scenario = draft.build().unwrap();
        assert!((scenario.cost_per_participant - COST_MAX).abs() < 1e-9);
    }

    #[test]
    fn test_from_scenario_restores_slider_position() {
        let mut draft = complete_draft();
        draft.cost = CostInput::Slider(137);
        let scenario = draft.build().unwrap();

        let restored = ScenarioDraft::from_scenario(&scenario);
        assert_eq!(restored.cost, CostInput::Slider(137));
        assert_eq!(restored.build().unwrap(), scenario);
    }

    #[test]
    fn test_from_scenario_keeps_typed_cost() {
        // 500 sits between slider positions 76 and 77.
        let scenario = complete_draft().build().unwrap();
        let restored = ScenarioDraft::from_scenario(&scenario);
        assert_eq!(restored.cost, CostInput::Direct(500.0));
        assert_eq!(restored.build().unwrap(), scenario);
    }

    #[test]
    fn test_reference_scenario() {
        let scenario = Scenario::reference(800, 120.0);
        assert!(scenario.training_level.is_reference());
        assert!(scenario.delivery_method.is_reference());
        assert!(scenario.accreditation.is_reference());
        assert!(scenario.location.is_reference());
    }
}
