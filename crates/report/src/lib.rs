use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
mod atomic_write;
pub mod layout;
pub mod pdf;
mod report_error;
#[cfg(target_arch = "wasm32")]
mod wasm_download;


pub use report_error::ReportError;

use model::calculator::CalculatorNotice;
use model::scenario_book::{SavedScenario, ScenarioBook};

/// File name of the exported comparison.
pub const REPORT_FILE_NAME: &str = "Scenarios_Comparison.pdf";

/// Export every saved scenario to a PDF.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ExportReportEvent;

/// Where the report goes. On the web only the file name is used.
#[derive(Resource, Debug, Clone)]
pub struct ReportSettings {
    pub output_path: std::path::PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_path: REPORT_FILE_NAME.into(),
        }
    }
}

/// Lay out, encode and write the report. Returns where it went.
pub fn export_report(
    scenarios: &[SavedScenario],
    settings: &ReportSettings,
) -> Result<String, ReportError> {
    if scenarios.is_empty() {
        return Err(ReportError::NoScenarios);
    }
    let bytes = pdf::encode_pdf(&layout::layout_report(scenarios));
    write_output(settings, &bytes)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_output(settings: &ReportSettings, bytes: &[u8]) -> Result<String, ReportError> {
    atomic_write::atomic_write(&settings.output_path, bytes)?;
    Ok(settings.output_path.display().to_string())
}

#[cfg(target_arch = "wasm32")]
fn write_output(settings: &ReportSettings, bytes: &[u8]) -> Result<String, ReportError> {
    let file_name = settings
        .output_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(REPORT_FILE_NAME);
    wasm_download::trigger_download(file_name, bytes).map_err(ReportError::Download)?;
    Ok(file_name.to_string())
}

fn handle_export(
    mut events: EventReader<ExportReportEvent>,
    book: Res<ScenarioBook>,
    settings: Res<ReportSettings>,
    mut notices: EventWriter<CalculatorNotice>,
) {
    if events.read().count() == 0 {
        return;
    }
    match export_report(book.entries(), &settings) {
        Ok(location) => {
            info!("Exported {} scenarios to {location}", book.len());
            notices.send(CalculatorNotice::info(format!(
                "Exported {} scenario(s) to {location}.",
                book.len()
            )));
        }
        Err(ReportError::NoScenarios) => {
            warn!("Export requested with no saved scenarios");
            notices.send(CalculatorNotice::warning(
                ReportError::NoScenarios.to_string(),
            ));
        }
        Err(e) => {
            error!("Report export failed: {e}");
            notices.send(CalculatorNotice::error(e.to_string()));
        }
    }
}

pub struct ReportPlugin;

impl Plugin for ReportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ReportSettings>()
            .add_event::<ExportReportEvent>()
            .add_event::<CalculatorNotice>()
            .add_systems(Update, handle_export);
    }
}
