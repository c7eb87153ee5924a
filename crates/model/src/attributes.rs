//! Discrete program attributes, their levels, and total per-level tables.
//!
//! | Attribute        | Levels                                      | Reference      |
//! |------------------|---------------------------------------------|----------------|
//! | Training Level   | Frontline, Intermediate, Advanced           | Advanced       |
//! | Delivery Method  | In-Person, Online, Hybrid                   | Online         |
//! | Accreditation    | National, International, None               | None           |
//! | Location         | State-Level, Regional Centers, District-Level | District-Level |
//!
//! Level order is declaration order; WTP output and the coefficient file both
//! follow it.

use std::fmt;
use std::marker::PhantomData;

// =============================================================================
// Attribute kinds
// =============================================================================

/// The four discrete attributes a scenario selects a level for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    TrainingLevel,
    DeliveryMethod,
    Accreditation,
    Location,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::TrainingLevel,
        Attribute::DeliveryMethod,
        Attribute::Accreditation,
        Attribute::Location,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::TrainingLevel => "Training Level",
            Attribute::DeliveryMethod => "Delivery Method",
            Attribute::Accreditation => "Accreditation",
            Attribute::Location => "Location",
        }
    }

    /// Key used in configuration files.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::TrainingLevel => "TrainingLevel",
            Attribute::DeliveryMethod => "DeliveryMethod",
            Attribute::Accreditation => "Accreditation",
            Attribute::Location => "Location",
        }
    }
}

/// The continuous attributes, each entering utility through a single slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContinuousAttribute {
    CohortSize,
    Cost,
}

impl ContinuousAttribute {
    pub const ALL: [ContinuousAttribute; 2] =
        [ContinuousAttribute::CohortSize, ContinuousAttribute::Cost];

    pub fn label(self) -> &'static str {
        match self {
            ContinuousAttribute::CohortSize => "Cohort Size",
            ContinuousAttribute::Cost => "Cost per Participant",
        }
    }
}

// =============================================================================
// Level trait
// =============================================================================

/// A level of one discrete attribute.
///
/// `ordinal` must return the level's position in `ALL`; `LevelTable` relies on
/// it for lookups.
pub trait AttributeLevel: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const ATTRIBUTE: Attribute;
    const ALL: &'static [Self];
    /// The zero-utility level other levels are measured against.
    const REFERENCE: Self;

    fn label(self) -> &'static str;
    fn ordinal(self) -> usize;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|level| level.label() == label)
    }

    fn is_reference(self) -> bool {
        self == Self::REFERENCE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainingLevel {
    Frontline,
    Intermediate,
    Advanced,
}

impl AttributeLevel for TrainingLevel {
    const ATTRIBUTE: Attribute = Attribute::TrainingLevel;
    const ALL: &'static [Self] = &[
        TrainingLevel::Frontline,
        TrainingLevel::Intermediate,
        TrainingLevel::Advanced,
    ];
    const REFERENCE: Self = TrainingLevel::Advanced;

    fn label(self) -> &'static str {
        match self {
            TrainingLevel::Frontline => "Frontline",
            TrainingLevel::Intermediate => "Intermediate",
            TrainingLevel::Advanced => "Advanced",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            TrainingLevel::Frontline => 0,
            TrainingLevel::Intermediate => 1,
            TrainingLevel::Advanced => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryMethod {
    InPerson,
    Online,
    Hybrid,
}

impl AttributeLevel for DeliveryMethod {
    const ATTRIBUTE: Attribute = Attribute::DeliveryMethod;
    const ALL: &'static [Self] = &[
        DeliveryMethod::InPerson,
        DeliveryMethod::Online,
        DeliveryMethod::Hybrid,
    ];
    const REFERENCE: Self = DeliveryMethod::Online;

    fn label(self) -> &'static str {
        match self {
            DeliveryMethod::InPerson => "In-Person",
            DeliveryMethod::Online => "Online",
            DeliveryMethod::Hybrid => "Hybrid",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            DeliveryMethod::InPerson => 0,
            DeliveryMethod::Online => 1,
            DeliveryMethod::Hybrid => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accreditation {
    National,
    International,
    None,
}

impl AttributeLevel for Accreditation {
    const ATTRIBUTE: Attribute = Attribute::Accreditation;
    const ALL: &'static [Self] = &[
        Accreditation::National,
        Accreditation::International,
        Accreditation::None,
    ];
    const REFERENCE: Self = Accreditation::None;

    fn label(self) -> &'static str {
        match self {
            Accreditation::National => "National",
            Accreditation::International => "International",
            Accreditation::None => "None",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            Accreditation::National => 0,
            Accreditation::International => 1,
            Accreditation::None => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    StateLevel,
    RegionalCenters,
    DistrictLevel,
}

impl AttributeLevel for Location {
    const ATTRIBUTE: Attribute = Attribute::Location;
    const ALL: &'static [Self] = &[
        Location::StateLevel,
        Location::RegionalCenters,
        Location::DistrictLevel,
    ];
    const REFERENCE: Self = Location::DistrictLevel;

    fn label(self) -> &'static str {
        match self {
            Location::StateLevel => "State-Level",
            Location::RegionalCenters => "Regional Centers",
            Location::DistrictLevel => "District-Level",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            Location::StateLevel => 0,
            Location::RegionalCenters => 1,
            Location::DistrictLevel => 2,
        }
    }
}

// =============================================================================
// LevelTable
// =============================================================================

/// A value for every level of attribute `L`.
///
/// The only constructor visits each level, so lookups are total.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTable<L, V> {
    values: Vec<V>,
    _level: PhantomData<fn() -> L>,
}

/// Utility weight per level.
pub type LevelWeights<L> = LevelTable<L, f64>;

impl<L: AttributeLevel, V> LevelTable<L, V> {
    /// Build a table by evaluating `f` for every level in declaration order.
    pub fn from_fn(f: impl FnMut(L) -> V) -> Self {
        Self {
            values: L::ALL.iter().copied().map(f).collect(),
            _level: PhantomData,
        }
    }

    pub fn get(&self, level: L) -> &V {
        &self.values[level.ordinal()]
    }

    pub fn set(&mut self, level: L, value: V) {
        self.values[level.ordinal()] = value;
    }

    /// Levels paired with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (L, &V)> + '_ {
        L::ALL.iter().copied().zip(self.values.iter())
    }
}

impl<L: AttributeLevel> LevelTable<L, f64> {
    /// Weight of `level` minus the weight of the reference level.
    pub fn relative_to_reference(&self, level: L) -> f64 {
        self.get(level) - self.get(L::REFERENCE)
    }
}
