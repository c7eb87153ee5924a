use bevy::prelude::*;

use crate::cost_benefit::QalyScenario;

/// Evaluate the current draft and store the results.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ComputeResultsEvent;

/// Change the QALY assumption. Stored results are re-costed without
/// recomputing uptake.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectQalyScenarioEvent(pub QalyScenario);

/// Save the current draft. `None` picks the next "Scenario N" name.
#[derive(Event, Debug, Clone, Default)]
pub struct SaveScenarioEvent {
    pub name: Option<String>,
}

/// Restore a saved scenario into the draft.
#[derive(Event, Debug, Clone, Copy)]
pub struct LoadScenarioEvent {
    pub index: usize,
}

/// Remove a saved scenario. Confirmation happens in the UI before this is sent.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeleteScenarioEvent {
    pub index: usize,
}
