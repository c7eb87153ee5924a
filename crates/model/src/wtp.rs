//! Willingness-to-pay engine.
//!
//! For a utility difference `diff` (a level against its reference, or a
//! continuous slope for a one-unit increase):
//!
//! ```text
//! wtp            = diff / (−cost_slope) × scale
//! standard_error = |wtp| × 0.1
//! ```
//!
//! `scale` is a display convention. The 10% band is a placeholder, not an
//! estimate of sampling variance.

use crate::attributes::{
    Accreditation, Attribute, ContinuousAttribute, DeliveryMethod, Location,
    TrainingLevel,
};
use crate::coefficients::{CoefficientTable, WeightedAttribute};
use crate::config::WTP_STANDARD_ERROR_FRACTION;
use crate::scenario::Scenario;

/// What a WTP entry values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WtpSubject {
    /// A non-reference level of a discrete attribute.
    Level {
        attribute: Attribute,
        level: &'static str,
    },
    /// One more unit of a continuous attribute.
    Increment(ContinuousAttribute),
}

impl WtpSubject {
    pub fn label(&self) -> String {
        match self {
            WtpSubject::Level { attribute, level } => format!("{}: {}", attribute.label(), level),
            WtpSubject::Increment(attribute) => format!("{}: +1", attribute.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WtpEntry {
    pub subject: WtpSubject,
    pub label: String,
    /// Dollar-equivalent value, after scaling.
    pub wtp: f64,
    pub standard_error: f64,
}

impl WtpEntry {
    fn new(subject: WtpSubject, wtp: f64) -> Self {
        Self {
            label: subject.label(),
            subject,
            wtp,
            standard_error: wtp.abs() * WTP_STANDARD_ERROR_FRACTION,
        }
    }

    pub fn lower(&self) -> f64 {
        self.wtp - self.standard_error
    }

    pub fn upper(&self) -> f64 {
        self.wtp + self.standard_error
    }
}

/// Convert a utility difference into scaled dollars.
pub fn utility_to_dollars(diff: f64, coeffs: &CoefficientTable, scale: f64) -> f64 {
    diff / -coeffs.cost_slope * scale
}

/// WTP for one level relative to its attribute's reference. Zero for the
/// reference level itself.
pub fn level_wtp<L: WeightedAttribute>(coeffs: &CoefficientTable, level: L, scale: f64) -> f64 {
    utility_to_dollars(coeffs.weight_difference(level), coeffs, scale)
}

/// WTP for every non-reference level and every one-unit continuous increase,
/// in attribute declaration order.
pub fn compute_wtp(coeffs: &CoefficientTable, scale: f64) -> Vec<WtpEntry> {
    let mut entries = Vec::new();
    push_levels::<TrainingLevel>(&mut entries, coeffs, scale);
    push_levels::<DeliveryMethod>(&mut entries, coeffs, scale);
    push_levels::<Accreditation>(&mut entries, coeffs, scale);
    push_levels::<Location>(&mut entries, coeffs, scale);
    for attribute in ContinuousAttribute::ALL {
        let wtp = utility_to_dollars(coeffs.slope(attribute), coeffs, scale);
        entries.push(WtpEntry::new(WtpSubject::Increment(attribute), wtp));
    }
    entries
}

fn push_levels<L: WeightedAttribute>(
    entries: &mut Vec<WtpEntry>,
    coeffs: &CoefficientTable,
    scale: f64,
) {
    for &level in L::ALL.iter().filter(|level| !level.is_reference()) {
        let subject = WtpSubject::Level {
            attribute: L::ATTRIBUTE,
            level: level.label(),
        };
        entries.push(WtpEntry::new(subject, level_wtp(coeffs, level, scale)));
    }
}

/// Combined WTP of the scenario's discrete choices over the all-reference
/// package.
pub fn scenario_wtp(scenario: &Scenario, coeffs: &CoefficientTable, scale: f64) -> f64 {
    level_wtp(coeffs, scenario.training_level, scale)
        + level_wtp(coeffs, scenario.delivery_method, scale)
        + level_wtp(coeffs, scenario.accreditation, scale)
        + level_wtp(coeffs, scenario.location, scale)
}
