use bevy_egui::egui;

use model::calculator::{NoticeLevel, NoticeLog};

fn level_color(level: NoticeLevel) -> egui::Color32 {
    match level {
        NoticeLevel::Error => egui::Color32::from_rgb(192, 57, 43),
        NoticeLevel::Warning => egui::Color32::from_rgb(211, 132, 0),
        NoticeLevel::Info => egui::Color32::from_rgb(39, 174, 96),
    }
}

/// One-line bar with the most recent undismissed notice.
pub(crate) fn show(ui: &mut egui::Ui, log: &mut NoticeLog) {
    let Some((id, level, text)) = log.latest().map(|n| (n.id, n.level, n.text.clone())) else {
        return;
    };
    ui.horizontal(|ui| {
        ui.colored_label(level_color(level), format!("{}:", level.label()));
        ui.label(text);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Dismiss").clicked() {
                log.dismiss(id);
            }
        });
    });
}
