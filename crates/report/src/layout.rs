//! Page layout for the scenario comparison report.
//!
//! Positions are in millimetres from the top-left corner of an A4 page,
//! measured to the text baseline. Every scenario block is budgeted
//! [`BLOCK_BUDGET_MM`] of vertical space when deciding whether it still fits
//! on the current page, regardless of how tall it actually is.

use model::attributes::AttributeLevel;
use model::scenario_book::SavedScenario;

pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
pub const TOP_MM: f64 = 15.0;
pub const BOTTOM_MARGIN_MM: f64 = 15.0;
pub const LEFT_MM: f64 = 15.0;
pub const BLOCK_BUDGET_MM: f64 = 70.0;

pub const REPORT_TITLE: &str = "STEPS - Scenarios Comparison";
pub const TITLE_FONT_SIZE: f64 = 16.0;
pub const HEADING_FONT_SIZE: f64 = 14.0;
pub const BODY_FONT_SIZE: f64 = 12.0;

const TITLE_ADVANCE_MM: f64 = 10.0;
const HEADING_ADVANCE_MM: f64 = 7.0;
const LINE_ADVANCE_MM: f64 = 5.0;
const BLOCK_GAP_MM: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    /// `x_mm` is the horizontal centre of the text.
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x_mm: f64,
    pub y_mm: f64,
    pub font_size: f64,
    pub align: TextAlign,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<PageLayout>,
}

impl ReportLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }

    /// Scenario heading lines, in report order.
    pub fn headings(&self) -> Vec<&str> {
        self.lines()
            .filter(|l| l.font_size == HEADING_FONT_SIZE)
            .map(|l| l.text.as_str())
            .collect()
    }
}

/// Body lines of one scenario block, without the heading.
pub fn scenario_lines(saved: &SavedScenario) -> [String; 8] {
    let s = &saved.scenario;
    [
        format!("Training: {}", s.training_level.label()),
        format!("Delivery: {}", s.delivery_method.label()),
        format!("Accreditation: {}", s.accreditation.label()),
        format!("Location: {}", s.location.label()),
        format!("Cohort: {}", s.cohort_size),
        format!("Cost: ${:.0}", s.cost_per_participant),
        format!("Uptake: {:.1}%", saved.predicted_uptake),
        format!("Net Benefit: ${:.2}", saved.net_benefit),
    ]
}

/// Lay out every saved scenario in order. The title appears on the first
/// page only.
pub fn layout_report(scenarios: &[SavedScenario]) -> ReportLayout {
    let mut pages = vec![PageLayout::default()];
    let mut y = TOP_MM;

    pages[0].lines.push(TextLine {
        x_mm: PAGE_WIDTH_MM / 2.0,
        y_mm: y,
        font_size: TITLE_FONT_SIZE,
        align: TextAlign::Center,
        text: REPORT_TITLE.to_string(),
    });
    y += TITLE_ADVANCE_MM;

    for (idx, saved) in scenarios.iter().enumerate() {
        if y + BLOCK_BUDGET_MM > PAGE_HEIGHT_MM - BOTTOM_MARGIN_MM {
            pages.push(PageLayout::default());
            y = TOP_MM;
        }
        let Some(page) = pages.last_mut() else {
            break;
        };

        page.lines.push(left(
            y,
            HEADING_FONT_SIZE,
            format!("Scenario {}: {}", idx + 1, saved.name),
        ));
        y += HEADING_ADVANCE_MM;

        let body = scenario_lines(saved);
        let last = body.len() - 1;
        for (i, text) in body.into_iter().enumerate() {
            page.lines.push(left(y, BODY_FONT_SIZE, text));
            y += if i == last {
                BLOCK_GAP_MM
            } else {
                LINE_ADVANCE_MM
            };
        }
    }

    ReportLayout { pages }
}

fn left(y_mm: f64, font_size: f64, text: String) -> TextLine {
    TextLine {
        x_mm: LEFT_MM,
        y_mm,
        font_size,
        align: TextAlign::Left,
        text,
    }
}
