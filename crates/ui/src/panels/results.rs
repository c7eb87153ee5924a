use bevy_egui::egui;

use model::evaluation::ScenarioResults;

use crate::charts::{draw_doughnut, legend_item, REMAINING_COLOR, UPTAKE_COLOR};
use crate::format::percent;

pub(crate) fn show(ui: &mut egui::Ui, latest: Option<&ScenarioResults>) {
    ui.heading("Predicted Uptake");
    let Some(results) = latest else {
        ui.label("Choose the inputs and press Calculate to see results.");
        return;
    };
    let uptake = results.uptake;

    ui.add_space(4.0);
    ui.label(
        egui::RichText::new(format!(
            "Predicted Program Uptake: {}",
            percent(uptake.percent)
        ))
        .strong()
        .size(16.0),
    );
    ui.label(uptake.recommendation());
    ui.add_space(8.0);

    draw_doughnut(
        ui,
        &[
            (uptake.percent, UPTAKE_COLOR),
            (100.0 - uptake.percent, REMAINING_COLOR),
        ],
        220.0,
        &percent(uptake.percent),
    );
    ui.horizontal(|ui| {
        legend_item(ui, UPTAKE_COLOR, "Uptake");
        legend_item(ui, REMAINING_COLOR, "Remaining");
    });
}
