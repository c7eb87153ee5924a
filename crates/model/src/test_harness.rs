//! # TestCalculator: headless integration test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `ModelPlugin` so that
//! calculator requests can be driven through real events and systems without
//! a window or egui.

use bevy::prelude::*;

use crate::attributes::{Accreditation, DeliveryMethod, Location, TrainingLevel};
use crate::calculator::{
    CalculatorNotice, CalculatorState, ComputeResultsEvent, DeleteScenarioEvent,
    LoadScenarioEvent, NoticeLevel, NoticeLog, SaveScenarioEvent, SelectQalyScenarioEvent,
};
use crate::coefficients::CoefficientTable;
use crate::config::ModelConfig;
use crate::cost_benefit::QalyScenario;
use crate::evaluation::ScenarioResults;
use crate::scenario::{CostInput, ScenarioDraft};
use crate::scenario_book::ScenarioBook;
use crate::uptake::UptakeNoiseSource;
use crate::ModelPlugin;

pub struct TestCalculator {
    app: App,
}

impl Default for TestCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCalculator {
    /// Default coefficients, default model config, no jitter. The
    /// environment is never consulted.
    pub fn new() -> Self {
        Self::build(
            CoefficientTable::default(),
            ModelConfig::default(),
            UptakeNoiseSource::default(),
        )
    }

    pub fn with_coefficients(coefficients: CoefficientTable) -> Self {
        Self::build(
            coefficients,
            ModelConfig::default(),
            UptakeNoiseSource::default(),
        )
    }

    pub fn with_config(config: ModelConfig) -> Self {
        Self::build(
            CoefficientTable::default(),
            config,
            UptakeNoiseSource::default(),
        )
    }

    pub fn with_noise(noise: UptakeNoiseSource) -> Self {
        Self::build(CoefficientTable::default(), ModelConfig::default(), noise)
    }

    fn build(coefficients: CoefficientTable, config: ModelConfig, noise: UptakeNoiseSource) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Inserted before the plugin so STEPS_CONFIG and the jitter variable
        // are ignored.
        app.insert_resource(coefficients);
        app.insert_resource(config);
        app.insert_resource(noise);
        app.add_plugins(ModelPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Inputs
    // -----------------------------------------------------------------------

    pub fn draft_mut(&mut self) -> Mut<'_, ScenarioDraft> {
        let state = self.app.world_mut().resource_mut::<CalculatorState>();
        state.map_unchanged(|s| &mut s.draft)
    }

    pub fn select(
        &mut self,
        training_level: TrainingLevel,
        delivery_method: DeliveryMethod,
        accreditation: Accreditation,
        location: Location,
    ) -> &mut Self {
        {
            let mut draft = self.draft_mut();
            draft.training_level = Some(training_level);
            draft.delivery_method = Some(delivery_method);
            draft.accreditation = Some(accreditation);
            draft.location = Some(location);
        }
        self
    }

    pub fn cohort(&mut self, cohort_size: u32) -> &mut Self {
        self.draft_mut().cohort_size = cohort_size;
        self
    }

    pub fn cost(&mut self, cost: CostInput) -> &mut Self {
        self.draft_mut().cost = cost;
        self
    }

    // -----------------------------------------------------------------------
    // Requests (each one runs a frame)
    // -----------------------------------------------------------------------

    pub fn compute(&mut self) -> &mut Self {
        self.send(ComputeResultsEvent)
    }

    pub fn select_qaly(&mut self, qaly: QalyScenario) -> &mut Self {
        self.send(SelectQalyScenarioEvent(qaly))
    }

    pub fn save(&mut self) -> &mut Self {
        self.send(SaveScenarioEvent::default())
    }

    pub fn save_as(&mut self, name: &str) -> &mut Self {
        self.send(SaveScenarioEvent {
            name: Some(name.to_string()),
        })
    }

    pub fn load(&mut self, index: usize) -> &mut Self {
        self.send(LoadScenarioEvent { index })
    }

    pub fn delete(&mut self, index: usize) -> &mut Self {
        self.send(DeleteScenarioEvent { index })
    }

    fn send<E: Event>(&mut self, event: E) -> &mut Self {
        self.app.world_mut().send_event(event);
        self.app.update();
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn state(&self) -> &CalculatorState {
        self.resource::<CalculatorState>()
    }

    pub fn latest(&self) -> Option<&ScenarioResults> {
        self.state().latest.as_ref()
    }

    pub fn book(&self) -> &ScenarioBook {
        self.resource::<ScenarioBook>()
    }

    pub fn saved_names(&self) -> Vec<String> {
        self.book().entries().iter().map(|s| s.name.clone()).collect()
    }

    pub fn last_notice(&self) -> Option<(NoticeLevel, String)> {
        self.resource::<NoticeLog>()
            .entries
            .last()
            .map(|n| (n.level, n.text.clone()))
    }

    pub fn notice_count(&self) -> usize {
        self.resource::<NoticeLog>().entries.len()
    }

    /// Queue a notice as if another plugin had reported something.
    pub fn notify(&mut self, notice: CalculatorNotice) {
        self.send(notice);
    }
}
