use bevy_egui::egui;

use model::attributes::{Accreditation, AttributeLevel, DeliveryMethod, Location, TrainingLevel};
use model::config::{
    cost_from_slider, COHORT_SIZE_MAX, COHORT_SIZE_MIN, COST_MAX, COST_MIN, COST_SLIDER_MAX,
};
use model::scenario::{CostInput, ScenarioDraft};

use crate::format::currency;

fn level_choice<L: AttributeLevel>(ui: &mut egui::Ui, selected: &mut Option<L>) {
    ui.strong(L::ATTRIBUTE.label());
    ui.horizontal_wrapped(|ui| {
        for &level in L::ALL {
            ui.radio_value(selected, Some(level), level.label());
        }
    });
    ui.add_space(4.0);
}

fn cost_input(ui: &mut egui::Ui, cost: &mut CostInput) {
    ui.strong("Cost per Participant");
    let mut direct = matches!(cost, CostInput::Direct(_));
    ui.horizontal(|ui| {
        if ui.radio_value(&mut direct, false, "Slider").clicked() {
            *cost = CostInput::Slider(cost.slider_index());
        }
        if ui.radio_value(&mut direct, true, "Exact amount").clicked() {
            *cost = CostInput::Direct(cost.amount());
        }
    });

    match cost {
        CostInput::Slider(index) => {
            ui.horizontal(|ui| {
                ui.add(egui::Slider::new(index, 0..=COST_SLIDER_MAX).show_value(false));
                ui.label(format!("{} (approx.)", currency(cost_from_slider(*index), 0)));
            });
        }
        CostInput::Direct(amount) => {
            ui.add(
                egui::DragValue::new(amount)
                    .range(COST_MIN..=COST_MAX)
                    .speed(5.0)
                    .prefix("$"),
            );
        }
    }
}

/// Draw the inputs form. Returns true when Calculate was pressed.
pub(crate) fn show(ui: &mut egui::Ui, draft: &mut ScenarioDraft) -> bool {
    ui.heading("Program Inputs");
    ui.add_space(6.0);

    level_choice::<TrainingLevel>(ui, &mut draft.training_level);
    level_choice::<DeliveryMethod>(ui, &mut draft.delivery_method);
    level_choice::<Accreditation>(ui, &mut draft.accreditation);
    level_choice::<Location>(ui, &mut draft.location);

    ui.strong("Cohort Size");
    ui.add(egui::Slider::new(
        &mut draft.cohort_size,
        COHORT_SIZE_MIN..=COHORT_SIZE_MAX,
    ));
    ui.add_space(4.0);

    cost_input(ui, &mut draft.cost);
    ui.add_space(10.0);

    let missing = draft.missing_selections();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|a| a.label()).collect();
        ui.weak(format!("Still to choose: {}", names.join(", ")));
    }

    ui.horizontal(|ui| {
        let calculate = ui.button("Calculate").clicked();
        if ui.button("Clear selections").clicked() {
            *draft = ScenarioDraft::default();
        }
        calculate
    })
    .inner
}
