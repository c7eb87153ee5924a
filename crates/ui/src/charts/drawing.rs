//! Painter-drawn charts: doughnut, vertical bars with optional error bars,
//! and legend items.

use bevy_egui::egui;

use super::scale::{slice_angles, value_range, value_to_y};
use crate::format::compact;

pub(crate) struct Bar<'a> {
    pub label: &'a str,
    pub value: f64,
    /// Symmetric error, drawn as a whisker when present.
    pub error: Option<f64>,
    pub color: egui::Color32,
}

const AXIS_GUTTER: f32 = 44.0;
const LABEL_BAND: f32 = 34.0;

/// Ring segments are approximated by quads this many radians wide.
const ARC_STEP: f32 = 0.05;

pub(crate) fn draw_doughnut(
    ui: &mut egui::Ui,
    slices: &[(f64, egui::Color32)],
    size: f32,
    center_text: &str,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let outer = size * 0.48;
    let inner = outer * 0.55;

    let shares: Vec<f64> = slices.iter().map(|(v, _)| *v).collect();
    for ((start, sweep), (_, color)) in slice_angles(&shares).into_iter().zip(slices) {
        if sweep <= 0.0 {
            continue;
        }
        let steps = (sweep / ARC_STEP).ceil().max(1.0) as usize;
        for i in 0..steps {
            let a0 = start + sweep * i as f32 / steps as f32;
            let a1 = start + sweep * (i + 1) as f32 / steps as f32;
            let quad = vec![
                polar(center, outer, a0),
                polar(center, outer, a1),
                polar(center, inner, a1),
                polar(center, inner, a0),
            ];
            painter.add(egui::Shape::convex_polygon(
                quad,
                *color,
                egui::Stroke::NONE,
            ));
        }
    }

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        center_text,
        egui::FontId::proportional(16.0),
        ui.visuals().text_color(),
    );
}

/// Clockwise from 12 o'clock.
fn polar(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    egui::pos2(
        center.x + radius * angle.sin(),
        center.y - radius * angle.cos(),
    )
}

pub(crate) fn draw_bar_chart(ui: &mut egui::Ui, bars: &[Bar<'_>], width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);

    if bars.is_empty() {
        return;
    }

    let values: Vec<f64> = bars.iter().map(|b| b.value).collect();
    let errors: Vec<f64> = bars.iter().map(|b| b.error.unwrap_or(0.0)).collect();
    let range = value_range(&values, &errors);

    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + AXIS_GUTTER, rect.min.y + 8.0),
        egui::pos2(rect.max.x - 6.0, rect.max.y - LABEL_BAND),
    );
    let text_color = ui.visuals().text_color();
    let grid = egui::Stroke::new(0.5, ui.visuals().weak_text_color());

    for i in 0..=4 {
        let v = range.0 + (range.1 - range.0) * i as f64 / 4.0;
        let y = value_to_y(v, range, plot.min.y, plot.max.y);
        painter.line_segment([egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)], grid);
        painter.text(
            egui::pos2(plot.min.x - 4.0, y),
            egui::Align2::RIGHT_CENTER,
            compact(v),
            egui::FontId::proportional(9.0),
            text_color,
        );
    }

    let zero_y = value_to_y(0.0, range, plot.min.y, plot.max.y);
    painter.line_segment(
        [egui::pos2(plot.min.x, zero_y), egui::pos2(plot.max.x, zero_y)],
        egui::Stroke::new(1.0, text_color),
    );

    let slot = plot.width() / bars.len() as f32;
    let bar_width = slot * 0.6;
    for (i, bar) in bars.iter().enumerate() {
        let cx = plot.min.x + slot * (i as f32 + 0.5);
        let y = value_to_y(bar.value, range, plot.min.y, plot.max.y);
        let bar_rect = egui::Rect::from_two_pos(
            egui::pos2(cx - bar_width / 2.0, zero_y),
            egui::pos2(cx + bar_width / 2.0, y),
        );
        painter.rect_filled(bar_rect, 1.0, bar.color);

        if let Some(err) = bar.error {
            let top = value_to_y(bar.value + err, range, plot.min.y, plot.max.y);
            let bottom = value_to_y(bar.value - err, range, plot.min.y, plot.max.y);
            let whisker = egui::Stroke::new(1.0, text_color);
            let cap = (bar_width * 0.25).min(5.0);
            painter.line_segment([egui::pos2(cx, top), egui::pos2(cx, bottom)], whisker);
            painter.line_segment([egui::pos2(cx - cap, top), egui::pos2(cx + cap, top)], whisker);
            painter.line_segment(
                [egui::pos2(cx - cap, bottom), egui::pos2(cx + cap, bottom)],
                whisker,
            );
        }

        painter.text(
            egui::pos2(cx, plot.max.y + 4.0),
            egui::Align2::CENTER_TOP,
            bar.label,
            egui::FontId::proportional(9.0),
            text_color,
        );
    }
}

pub(crate) fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 1.0, color);
    ui.label(text);
}
