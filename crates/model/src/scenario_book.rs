//! Saved scenarios for side-by-side comparison and export.
//!
//! Scenarios live only in memory, in the order they were saved. Names are
//! unique within the book.

use bevy::prelude::*;

use crate::error::ModelError;
use crate::evaluation::ScenarioResults;
use crate::scenario::Scenario;

/// A scenario frozen together with the headline figures computed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedScenario {
    pub name: String,
    pub scenario: Scenario,
    /// Uptake percentage at save time.
    pub predicted_uptake: f64,
    pub net_benefit: f64,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ScenarioBook {
    entries: Vec<SavedScenario>,
}

impl ScenarioBook {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SavedScenario> {
        self.entries.get(index)
    }

    /// Saved scenarios in insertion order.
    pub fn entries(&self) -> &[SavedScenario] {
        &self.entries
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|s| s.name == name)
    }

    /// First free name of the form "Scenario N", counting from the next
    /// position in the list.
    pub fn next_default_name(&self) -> String {
        (self.entries.len() + 1..)
            .map(|n| format!("Scenario {n}"))
            .find(|name| !self.contains_name(name))
            .unwrap_or_default()
    }

    /// Append a scenario under `name` (trimmed). Returns its index.
    pub fn save(&mut self, name: &str, results: &ScenarioResults) -> Result<usize, ModelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::EmptyScenarioName);
        }
        if self.contains_name(name) {
            return Err(ModelError::DuplicateScenarioName(name.to_string()));
        }
        self.entries.push(SavedScenario {
            name: name.to_string(),
            scenario: results.scenario,
            predicted_uptake: results.uptake.percent,
            net_benefit: results.cost_benefit.net_benefit,
        });
        Ok(self.entries.len() - 1)
    }

    /// Remove and return the scenario at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<SavedScenario> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }
}
