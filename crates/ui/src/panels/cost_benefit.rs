use bevy_egui::egui;

use model::calculator::{CalculatorState, SelectQalyScenarioEvent};
use model::cost_benefit::QalyScenario;

use super::CalculatorRequests;
use crate::charts::{draw_bar_chart, Bar, BENEFIT_COLOR, COST_COLOR, NET_COLOR};
use crate::format::{currency, currency_or_na, percent, with_separators};

fn qaly_selector(ui: &mut egui::Ui, current: QalyScenario, requests: &mut CalculatorRequests) {
    let mut selected = current;
    egui::ComboBox::from_label("QALY gain per participant")
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for q in QalyScenario::ALL {
                ui.selectable_value(&mut selected, q, q.label());
            }
        });
    if selected != current {
        requests.qaly.send(SelectQalyScenarioEvent(selected));
    }
}

pub(crate) fn show(ui: &mut egui::Ui, state: &CalculatorState, requests: &mut CalculatorRequests) {
    ui.heading("Costs & Benefits");
    qaly_selector(ui, state.qaly_scenario, requests);
    ui.add_space(6.0);

    let Some(results) = state.latest.as_ref() else {
        ui.label("Calculate a scenario first.");
        return;
    };
    let cb = &results.cost_benefit;

    egui::Grid::new("cba_summary")
        .num_columns(2)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            let rows = [
                ("Uptake (%)", percent(results.uptake.percent)),
                ("Participants", with_separators(cb.participants, 0)),
                ("Total Training Cost", currency(cb.total_cost, 0)),
                ("Cost per Participant", currency_or_na(cb.cost_per_participant(), 2)),
                ("Total QALYs", with_separators(cb.total_qalys, 2)),
                ("Monetized Benefits", currency(cb.monetized_benefit, 0)),
                ("Net Benefit", currency(cb.net_benefit, 0)),
            ];
            for (label, value) in rows {
                ui.strong(label);
                ui.label(value);
                ui.end_row();
            }
        });

    ui.add_space(10.0);
    ui.strong("Cost-Benefit Analysis");
    draw_bar_chart(
        ui,
        &[
            Bar {
                label: "Total Cost",
                value: cb.total_cost,
                error: None,
                color: COST_COLOR,
            },
            Bar {
                label: "Total Benefit",
                value: cb.total_benefit,
                error: None,
                color: BENEFIT_COLOR,
            },
            Bar {
                label: "Net Benefit",
                value: cb.net_benefit,
                error: None,
                color: NET_COLOR,
            },
        ],
        ui.available_width().min(520.0),
        240.0,
    );
}
