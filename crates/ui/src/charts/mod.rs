mod drawing;
mod scale;

use bevy_egui::egui;

pub(crate) use drawing::{draw_bar_chart, draw_doughnut, legend_item, Bar};

pub(crate) const UPTAKE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x27, 0xae, 0x60);
pub(crate) const REMAINING_COLOR: egui::Color32 = egui::Color32::from_rgb(0xe7, 0x4c, 0x3c);

pub(crate) const COST_COLOR: egui::Color32 = egui::Color32::from_rgb(0xc0, 0x39, 0x2b);
pub(crate) const BENEFIT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x27, 0xae, 0x60);
pub(crate) const NET_COLOR: egui::Color32 = egui::Color32::from_rgb(0xf1, 0xc4, 0x0f);

/// WTP bars are blue when positive, red when negative.
pub(crate) fn wtp_color(value: f64) -> egui::Color32 {
    if value >= 0.0 {
        egui::Color32::from_rgb(52, 152, 219)
    } else {
        egui::Color32::from_rgb(231, 76, 60)
    }
}
