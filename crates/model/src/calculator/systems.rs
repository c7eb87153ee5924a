use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::coefficients::CoefficientTable;
use crate::config::ModelConfig;
use crate::cost_benefit::{compute_cost_benefit, TierCostTable};
use crate::evaluation::{evaluate_scenario, ModelContext};
use crate::scenario::ScenarioDraft;
use crate::scenario_book::ScenarioBook;
use crate::uptake::{NoNoise, UptakeNoiseSource};

use super::events::{
    ComputeResultsEvent, DeleteScenarioEvent, LoadScenarioEvent, SaveScenarioEvent,
    SelectQalyScenarioEvent,
};
use super::notices::CalculatorNotice;
use super::CalculatorState;

/// Read-only model inputs shared by every handler.
#[derive(SystemParam)]
pub(crate) struct ModelResources<'w> {
    pub coefficients: Res<'w, CoefficientTable>,
    pub tiers: Res<'w, TierCostTable>,
    pub config: Res<'w, ModelConfig>,
}

impl ModelResources<'_> {
    fn context(&self) -> ModelContext<'_> {
        ModelContext {
            coefficients: &self.coefficients,
            tiers: &self.tiers,
            config: &self.config,
        }
    }
}

pub(crate) fn handle_load_scenario(
    mut events: EventReader<LoadScenarioEvent>,
    book: Res<ScenarioBook>,
    mut state: ResMut<CalculatorState>,
    mut notices: EventWriter<CalculatorNotice>,
) {
    for event in events.read() {
        let Some(saved) = book.get(event.index) else {
            warn!("Load requested for missing scenario #{}", event.index);
            continue;
        };
        state.draft = ScenarioDraft::from_scenario(&saved.scenario);
        info!("Loaded scenario \"{}\" into the inputs", saved.name);
        notices.send(CalculatorNotice::info(format!(
            "Scenario \"{}\" loaded into the inputs.",
            saved.name
        )));
    }
}

pub(crate) fn handle_delete_scenario(
    mut events: EventReader<DeleteScenarioEvent>,
    mut book: ResMut<ScenarioBook>,
    mut notices: EventWriter<CalculatorNotice>,
) {
    for event in events.read() {
        match book.remove(event.index) {
            Some(removed) => {
                info!("Deleted scenario \"{}\"", removed.name);
                notices.send(CalculatorNotice::info(format!(
                    "Scenario \"{}\" deleted.",
                    removed.name
                )));
            }
            None => warn!("Delete requested for missing scenario #{}", event.index),
        }
    }
}

pub(crate) fn handle_compute_results(
    mut events: EventReader<ComputeResultsEvent>,
    model: ModelResources,
    mut noise: ResMut<UptakeNoiseSource>,
    mut state: ResMut<CalculatorState>,
    mut notices: EventWriter<CalculatorNotice>,
) {
    // Several clicks in one frame still produce a single evaluation.
    if events.read().count() == 0 {
        return;
    }
    let scenario = match state.draft.build() {
        Ok(scenario) => scenario,
        Err(e) => {
            warn!("Compute rejected: {e}");
            notices.send(CalculatorNotice::warning(e.to_string()));
            return;
        }
    };
    let results = evaluate_scenario(
        &scenario,
        model.context(),
        state.qaly_scenario,
        noise.0.as_mut(),
    );
    info!(
        "Computed scenario: uptake {:.1}%, net benefit {:.2}",
        results.uptake.percent, results.cost_benefit.net_benefit
    );
    state.latest = Some(results);
}

pub(crate) fn handle_select_qaly(
    mut events: EventReader<SelectQalyScenarioEvent>,
    model: ModelResources,
    mut state: ResMut<CalculatorState>,
) {
    let Some(SelectQalyScenarioEvent(qaly)) = events.read().last().copied() else {
        return;
    };
    let state = &mut *state;
    state.qaly_scenario = qaly;
    if let Some(latest) = state.latest.as_mut() {
        latest.qaly_scenario = qaly;
        latest.cost_benefit = compute_cost_benefit(
            &latest.scenario,
            latest.uptake.fraction,
            &model.tiers,
            qaly,
            &model.config,
        );
    }
}

/// Saved figures are noise-free so a scenario compares the same way every
/// time it is exported.
pub(crate) fn handle_save_scenario(
    mut events: EventReader<SaveScenarioEvent>,
    model: ModelResources,
    state: Res<CalculatorState>,
    mut book: ResMut<ScenarioBook>,
    mut notices: EventWriter<CalculatorNotice>,
) {
    for event in events.read() {
        let scenario = match state.draft.build() {
            Ok(scenario) => scenario,
            Err(e) => {
                warn!("Save rejected: {e}");
                notices.send(CalculatorNotice::warning(e.to_string()));
                continue;
            }
        };
        let results = evaluate_scenario(
            &scenario,
            model.context(),
            state.qaly_scenario,
            &mut NoNoise,
        );
        let name = event
            .name
            .clone()
            .unwrap_or_else(|| book.next_default_name());
        match book.save(&name, &results) {
            Ok(index) => {
                let saved_name = book.get(index).map(|s| s.name.as_str()).unwrap_or("");
                info!("Saved scenario \"{saved_name}\" at position {index}");
                notices.send(CalculatorNotice::info(format!(
                    "Scenario \"{saved_name}\" saved successfully."
                )));
            }
            Err(e) => {
                warn!("Save rejected: {e}");
                notices.send(CalculatorNotice::warning(e.to_string()));
            }
        }
    }
}
