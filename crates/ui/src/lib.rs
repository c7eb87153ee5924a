use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod charts;
pub mod confirm_dialog;
pub mod format;
mod panels;
pub mod tabs;
pub mod theme;

pub use panels::ScenarioNameInput;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<tabs::ActiveTab>()
            .init_resource::<panels::ScenarioNameInput>()
            .init_resource::<confirm_dialog::PendingDelete>()
            .add_systems(Startup, theme::apply_steps_theme)
            .add_systems(
                Update,
                (panels::calculator_ui, confirm_dialog::confirm_delete_ui).chain(),
            );
    }
}
