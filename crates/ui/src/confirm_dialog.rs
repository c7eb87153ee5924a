//! Confirmation before deleting a saved scenario.
//!
//! The scenarios panel writes the index into [`PendingDelete`] instead of
//! sending the delete event. The dialog sends [`DeleteScenarioEvent`] on
//! confirmation and clears the resource either way.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use model::calculator::DeleteScenarioEvent;
use model::scenario_book::ScenarioBook;

/// Index of the saved scenario awaiting confirmation.
#[derive(Resource, Default)]
pub struct PendingDelete(pub Option<usize>);

pub(crate) fn confirm_delete_ui(
    mut contexts: EguiContexts,
    mut pending: ResMut<PendingDelete>,
    book: Res<ScenarioBook>,
    mut delete_events: EventWriter<DeleteScenarioEvent>,
) {
    let Some(index) = pending.0 else {
        return;
    };
    // Stale index, e.g. the list changed under the dialog.
    let Some(saved) = book.get(index) else {
        pending.0 = None;
        return;
    };

    let ctx = contexts.ctx_mut();

    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("confirm_delete_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(120),
            );
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    let mut should_clear = false;

    egui::Window::new("Delete Scenario")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(320.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.spacing_mut().item_spacing.y = 10.0;
                ui.add_space(12.0);

                ui.heading(format!("Delete \"{}\"", saved.name));
                ui.label("Are you sure you want to delete this scenario?");
                ui.add_space(12.0);

                let button_size = egui::Vec2::new(120.0, 32.0);
                ui.horizontal(|ui| {
                    let total_width = button_size.x * 2.0 + 16.0;
                    let avail = ui.available_width();
                    if avail > total_width {
                        ui.add_space((avail - total_width) / 2.0);
                    }

                    if ui
                        .add_sized(button_size, egui::Button::new("Delete"))
                        .clicked()
                    {
                        delete_events.send(DeleteScenarioEvent { index });
                        should_clear = true;
                    }

                    ui.add_space(16.0);

                    if ui
                        .add_sized(button_size, egui::Button::new("Cancel"))
                        .clicked()
                    {
                        should_clear = true;
                    }
                });

                ui.add_space(12.0);
            });
        });

    if should_clear {
        pending.0 = None;
    }
}
