// ---------------------------------------------------------------------------
// ModelError: failures surfaced by the calculator engines and configuration
// ---------------------------------------------------------------------------

use std::fmt;

use crate::attributes::Attribute;

/// Errors raised while building scenarios, loading configuration, or
/// managing the saved-scenario list.
#[derive(Debug)]
pub enum ModelError {
    /// A mandatory discrete selection was left empty.
    MissingSelection(Attribute),
    /// A continuous input lies outside its configured bounds.
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A configuration file names a level the attribute does not have.
    UnknownLevel { attribute: Attribute, level: String },
    /// A configuration file omits a level of an attribute.
    MissingLevel {
        attribute: Attribute,
        level: &'static str,
    },
    /// A coefficient is non-finite, or the cost slope is not negative.
    InvalidCoefficient { name: &'static str, value: f64 },
    /// A scenario with this name is already saved.
    DuplicateScenarioName(String),
    /// Scenario names must contain at least one visible character.
    EmptyScenarioName,
    /// Reading a configuration file failed.
    Io(std::io::Error),
    /// A configuration file is not valid JSON for the expected shape.
    Parse(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MissingSelection(attribute) => {
                write!(f, "Please select a {} before continuing", attribute.label())
            }
            ModelError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} {value} is outside the range {min}..={max}"),
            ModelError::UnknownLevel { attribute, level } => {
                write!(f, "Unknown {} level '{level}'", attribute.label())
            }
            ModelError::MissingLevel { attribute, level } => {
                write!(f, "No coefficient for {} level '{level}'", attribute.label())
            }
            ModelError::InvalidCoefficient { name, value } => {
                write!(f, "Invalid coefficient {name} = {value}")
            }
            ModelError::DuplicateScenarioName(name) => {
                write!(f, "A scenario named \"{name}\" already exists")
            }
            ModelError::EmptyScenarioName => write!(f, "Scenario name cannot be empty"),
            ModelError::Io(e) => write!(f, "I/O error: {e}"),
            ModelError::Parse(msg) => write!(f, "Configuration parse error: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ModelError {
    fn from(e: std::io::Error) -> Self {
        ModelError::Io(e)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Parse(e.to_string())
    }
}
