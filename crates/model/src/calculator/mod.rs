//! Calculator state and the systems that act on user requests.
//!
//! The UI edits `CalculatorState::draft` directly and sends events for
//! everything that computes or touches the scenario list. Handlers run in a
//! fixed order each frame: load, delete, compute, QALY change, save, then
//! notice collection.

pub mod events;
pub mod notices;
mod systems;

use bevy::prelude::*;

use crate::cost_benefit::QalyScenario;
use crate::evaluation::ScenarioResults;
use crate::scenario::ScenarioDraft;

pub use events::{
    ComputeResultsEvent, DeleteScenarioEvent, LoadScenarioEvent, SaveScenarioEvent,
    SelectQalyScenarioEvent,
};
pub use notices::{CalculatorNotice, Notice, NoticeLevel, NoticeLog};

/// Inputs being edited plus the most recent finished results.
#[derive(Resource, Debug, Clone, Default)]
pub struct CalculatorState {
    pub draft: ScenarioDraft,
    pub qaly_scenario: QalyScenario,
    /// `None` until the first successful compute.
    pub latest: Option<ScenarioResults>,
}

pub(crate) struct CalculatorPlugin;

impl Plugin for CalculatorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CalculatorState>()
            .init_resource::<NoticeLog>()
            .add_event::<ComputeResultsEvent>()
            .add_event::<SelectQalyScenarioEvent>()
            .add_event::<SaveScenarioEvent>()
            .add_event::<LoadScenarioEvent>()
            .add_event::<DeleteScenarioEvent>()
            .add_event::<CalculatorNotice>()
            .add_systems(
                Update,
                (
                    systems::handle_load_scenario,
                    systems::handle_delete_scenario,
                    systems::handle_compute_results,
                    systems::handle_select_qaly,
                    systems::handle_save_scenario,
                    notices::collect_notices,
                )
                    .chain(),
            );
    }
}
