use bevy_egui::egui;

use model::evaluation::ScenarioResults;

use crate::charts::{draw_bar_chart, wtp_color, Bar};
use crate::format::currency;

pub(crate) fn show(ui: &mut egui::Ui, latest: Option<&ScenarioResults>) {
    ui.heading("Willingness to Pay");
    let Some(results) = latest else {
        ui.label("Calculate a scenario first.");
        return;
    };
    ui.label("Value of each non-reference level, and of one more unit of cohort size or cost.");
    ui.add_space(6.0);

    let bars: Vec<Bar<'_>> = results
        .wtp
        .iter()
        .map(|entry| Bar {
            label: entry.label.as_str(),
            value: entry.wtp,
            error: Some(entry.standard_error),
            color: wtp_color(entry.wtp),
        })
        .collect();
    egui::ScrollArea::horizontal()
        .id_salt("wtp_chart")
        .show(ui, |ui| {
            draw_bar_chart(ui, &bars, (bars.len() as f32 * 90.0).max(480.0), 280.0);
        });
    ui.add_space(8.0);

    egui::Grid::new("wtp_table")
        .num_columns(3)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Feature");
            ui.strong("WTP");
            ui.strong("± SE");
            ui.end_row();
            for entry in &results.wtp {
                ui.label(&entry.label);
                ui.colored_label(wtp_color(entry.wtp), currency(entry.wtp, 2));
                ui.label(currency(entry.standard_error, 2));
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    ui.label(format!(
        "Selected package compared with the reference package: {}",
        currency(results.package_wtp, 2)
    ));
    ui.weak("Standard errors are a fixed 10% band for illustration, not estimates.");
}
