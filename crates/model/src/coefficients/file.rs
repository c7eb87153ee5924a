//! JSON configuration file: coefficient overrides plus engine settings.
//!
//! The `coefficients` section uses the same keys as the published table:
//!
//! ```json
//! {
//!   "coefficients": {
//!     "ASC": 1.0, "ASC_optout": 0.3,
//!     "TrainingLevel": { "Frontline": 0.6, "Intermediate": 0.3, "Advanced": 0.0 },
//!     "DeliveryMethod": { "In-Person": 0.5, "Online": 0.0, "Hybrid": 0.4 },
//!     "Accreditation": { "National": 0.4, "International": 0.8, "None": 0.0 },
//!     "Location": { "State-Level": 0.3, "Regional Centers": 0.2, "District-Level": 0.0 },
//!     "CohortSizeSlope": -0.0008, "CostSlope": -0.0001
//!   },
//!   "model": { "continuous_mode": { "mode": "absolute" }, "wtp_scale": 1000.0 }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::attributes::{
    Accreditation, DeliveryMethod, LevelTable, Location, TrainingLevel,
};
use crate::config::ModelConfig;
use crate::error::ModelError;

use super::{CoefficientTable, WeightedAttribute};

/// On-disk shape of a coefficient table. Levels are keyed by label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientFile {
    #[serde(rename = "ASC")]
    pub asc: f64,
    #[serde(rename = "ASC_optout")]
    pub asc_optout: f64,
    #[serde(rename = "TrainingLevel")]
    pub training_level: BTreeMap<String, f64>,
    #[serde(rename = "DeliveryMethod")]
    pub delivery_method: BTreeMap<String, f64>,
    #[serde(rename = "Accreditation")]
    pub accreditation: BTreeMap<String, f64>,
    #[serde(rename = "Location")]
    pub location: BTreeMap<String, f64>,
    #[serde(rename = "CohortSizeSlope")]
    pub cohort_size_slope: f64,
    #[serde(rename = "CostSlope")]
    pub cost_slope: f64,
}

/// Top-level configuration file. Both sections are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfigFile {
    #[serde(default)]
    pub coefficients: Option<CoefficientFile>,
    #[serde(default)]
    pub model: ModelConfig,
}

impl From<&CoefficientTable> for CoefficientFile {
    fn from(table: &CoefficientTable) -> Self {
        fn labelled<L: WeightedAttribute>(table: &CoefficientTable) -> BTreeMap<String, f64> {
            L::weights(table)
                .iter()
                .map(|(level, &w)| (level.label().to_string(), w))
                .collect()
        }
        Self {
            asc: table.asc,
            asc_optout: table.asc_optout,
            training_level: labelled::<TrainingLevel>(table),
            delivery_method: labelled::<DeliveryMethod>(table),
            accreditation: labelled::<Accreditation>(table),
            location: labelled::<Location>(table),
            cohort_size_slope: table.cohort_size_slope,
            cost_slope: table.cost_slope,
        }
    }
}

impl TryFrom<CoefficientFile> for CoefficientTable {
    type Error = ModelError;

    fn try_from(file: CoefficientFile) -> Result<Self, Self::Error> {
        let mut table = CoefficientTable {
            asc: file.asc,
            asc_optout: file.asc_optout,
            cohort_size_slope: file.cohort_size_slope,
            cost_slope: file.cost_slope,
            ..CoefficientTable::default()
        };
        fill_weights::<TrainingLevel>(&mut table, &file.training_level)?;
        fill_weights::<DeliveryMethod>(&mut table, &file.delivery_method)?;
        fill_weights::<Accreditation>(&mut table, &file.accreditation)?;
        fill_weights::<Location>(&mut table, &file.location)?;
        table.validate()?;
        Ok(table)
    }
}

/// Copy every level of `L` out of `entries`, rejecting unknown or missing labels.
fn fill_weights<L: WeightedAttribute>(
    table: &mut CoefficientTable,
    entries: &BTreeMap<String, f64>,
) -> Result<(), ModelError> {
    if let Some(unknown) = entries.keys().find(|k| L::from_label(k.as_str()).is_none()) {
        return Err(ModelError::UnknownLevel {
            attribute: L::ATTRIBUTE,
            level: unknown.clone(),
        });
    }
    let mut weights = LevelTable::from_fn(|_: L| 0.0);
    for &level in L::ALL {
        let weight = entries
            .get(level.label())
            .copied()
            .ok_or(ModelError::MissingLevel {
                attribute: L::ATTRIBUTE,
                level: level.label(),
            })?;
        weights.set(level, weight);
    }
    *L::weights_mut(table) = weights;
    Ok(())
}

/// Parse a configuration document from a JSON string.
pub fn parse_config(json: &str) -> Result<(Option<CoefficientTable>, ModelConfig), ModelError> {
    let file: CalculatorConfigFile = serde_json::from_str(json)?;
    let coefficients = file.coefficients.map(CoefficientTable::try_from).transpose()?;
    let model = &file.model;
    let positive = [
        ("wtp_scale", model.wtp_scale),
        ("reference_cohort", model.reference_cohort),
        ("value_per_qaly", model.value_per_qaly),
    ];
    if let Some(&(name, value)) = positive.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
        return Err(ModelError::InvalidCoefficient { name, value });
    }
    Ok((coefficients, file.model))
}

/// Read and validate a configuration file.
pub fn load_config_file(
    path: impl AsRef<Path>,
) -> Result<(Option<CoefficientTable>, ModelConfig), ModelError> {
    let json = std::fs::read_to_string(path)?;
    parse_config(&json)
}
