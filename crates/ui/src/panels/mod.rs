//! Calculator window: tab bar, notice bar and the panel for the active tab.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use model::calculator::{
    CalculatorState, ComputeResultsEvent, LoadScenarioEvent, NoticeLog, SaveScenarioEvent,
    SelectQalyScenarioEvent,
};
use model::scenario_book::ScenarioBook;
use report::ExportReportEvent;

use crate::confirm_dialog::PendingDelete;
use crate::tabs::{ActiveTab, Tab};

mod cost_benefit;
mod inputs;
mod intro;
mod notices;
mod results;
mod scenarios;
mod wtp;

/// Every request the panels can make of the model and report plugins.
#[derive(SystemParam)]
pub(crate) struct CalculatorRequests<'w> {
    pub compute: EventWriter<'w, ComputeResultsEvent>,
    pub qaly: EventWriter<'w, SelectQalyScenarioEvent>,
    pub save: EventWriter<'w, SaveScenarioEvent>,
    pub load: EventWriter<'w, LoadScenarioEvent>,
    pub export: EventWriter<'w, ExportReportEvent>,
}

/// Text in the scenario name box.
#[derive(Resource, Default)]
pub struct ScenarioNameInput(pub String);

#[allow(clippy::too_many_arguments)]
pub(crate) fn calculator_ui(
    mut contexts: EguiContexts,
    mut tab: ResMut<ActiveTab>,
    mut state: ResMut<CalculatorState>,
    book: Res<ScenarioBook>,
    mut notice_log: ResMut<NoticeLog>,
    mut name_input: ResMut<ScenarioNameInput>,
    mut pending: ResMut<PendingDelete>,
    mut requests: CalculatorRequests,
) {
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("steps_tabs").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.strong("STEPS");
            ui.separator();
            for t in Tab::ALL {
                if ui.selectable_label(tab.0 == t, t.label()).clicked() {
                    tab.0 = t;
                }
            }
        });
    });

    if notice_log.latest().is_some() {
        egui::TopBottomPanel::top("steps_notices").show(ctx, |ui| {
            notices::show(ui, &mut notice_log);
        });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        let current = tab.0;
        egui::ScrollArea::vertical().show(ui, |ui| match current {
            Tab::Introduction => intro::show(ui),
            Tab::Inputs => {
                if inputs::show(ui, &mut state.draft) {
                    requests.compute.send(ComputeResultsEvent);
                    tab.0 = Tab::Results;
                }
            }
            Tab::Results => results::show(ui, state.latest.as_ref()),
            Tab::CostBenefit => cost_benefit::show(ui, &state, &mut requests),
            Tab::Wtp => wtp::show(ui, state.latest.as_ref()),
            Tab::Scenarios => scenarios::show(
                ui,
                &book,
                &mut name_input.0,
                &mut pending,
                &mut tab,
                &mut requests,
            ),
        });
    });
}
