use bevy_egui::egui;

use model::calculator::{LoadScenarioEvent, SaveScenarioEvent};
use model::scenario_book::ScenarioBook;
use report::layout::scenario_lines;
use report::ExportReportEvent;

use super::CalculatorRequests;
use crate::confirm_dialog::PendingDelete;
use crate::tabs::{ActiveTab, Tab};

/// A blank name asks the book for the next default one.
pub(crate) fn save_request(name: &str) -> SaveScenarioEvent {
    let trimmed = name.trim();
    SaveScenarioEvent {
        name: (!trimmed.is_empty()).then(|| trimmed.to_string()),
    }
}

pub(crate) fn show(
    ui: &mut egui::Ui,
    book: &ScenarioBook,
    name_input: &mut String,
    pending: &mut PendingDelete,
    tab: &mut ActiveTab,
    requests: &mut CalculatorRequests,
) {
    ui.heading("Saved Scenarios");
    ui.label("Saving stores the current inputs with their noise-free uptake and net benefit.");
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(name_input)
                .hint_text(book.next_default_name())
                .desired_width(220.0),
        );
        if ui.button("Save Scenario").clicked() {
            requests.save.send(save_request(name_input));
            name_input.clear();
        }
        ui.add_enabled_ui(!book.is_empty(), |ui| {
            if ui.button("Export PDF").clicked() {
                requests.export.send(ExportReportEvent);
            }
        });
    });
    ui.add_space(8.0);

    if book.is_empty() {
        ui.weak("No scenarios saved yet.");
        return;
    }

    for (index, saved) in book.entries().iter().enumerate() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.strong(format!("Scenario {}: {}", index + 1, saved.name));
            for line in scenario_lines(saved) {
                ui.label(line);
            }
            ui.horizontal(|ui| {
                if ui.button("Load").clicked() {
                    requests.load.send(LoadScenarioEvent { index });
                    tab.0 = Tab::Inputs;
                }
                if ui.button("Delete").clicked() {
                    pending.0 = Some(index);
                }
            });
        });
        ui.add_space(4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_requests_default() {
        assert_eq!(save_request("").name, None);
        assert_eq!(save_request("   ").name, None);
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(save_request("  Pilot A ").name.as_deref(), Some("Pilot A"));
    }
}
