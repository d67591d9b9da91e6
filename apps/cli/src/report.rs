//! Gap Report Renderer — pure presentation over an `AnalysisResult`.
//! No side effects beyond read access; the driver prints the rendered block.

use crate::analysis::AnalysisResult;

pub const SUMMARY_PLACEHOLDER: &str = "No summary available.";
pub const NO_GAPS_MESSAGE: &str = "No critical keywords missing!";
pub const KEYWORD_GRID_COLUMNS: usize = 3;

const GRID_CELL_WIDTH: usize = 24;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Score bands: >70 strong, 51–70 moderate, <=50 weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score > 70 {
            ScoreBand::Strong
        } else if score > 50 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong match",
            ScoreBand::Moderate => "moderate match",
            ScoreBand::Weak => "weak match",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            ScoreBand::Strong => GREEN,
            ScoreBand::Moderate => YELLOW,
            ScoreBand::Weak => RED,
        }
    }
}

/// Partitions keywords into rows of `KEYWORD_GRID_COLUMNS` for display.
pub fn keyword_grid(keywords: &[String]) -> Vec<&[String]> {
    keywords.chunks(KEYWORD_GRID_COLUMNS).collect()
}

/// Renders the Phase 1 report as a plain-text block.
pub fn render_report(result: &AnalysisResult) -> String {
    let band = ScoreBand::from_score(result.match_score);
    let summary = result.summary.as_deref().unwrap_or(SUMMARY_PLACEHOLDER);

    let mut out = String::new();
    out.push_str("Phase 1 Report: Assessment\n");
    out.push_str(&format!(
        "  Match Score: {}{}{}%{} ({})\n",
        band.color(),
        BOLD,
        result.match_score,
        RESET,
        band.label()
    ));
    out.push_str(&format!("  {}\n", progress_bar(result.match_score)));
    out.push_str(&format!("  Summary: {summary}\n\n"));

    out.push_str("Missing Keywords Detected\n");
    if result.missing_keywords.is_empty() {
        out.push_str(&format!("  {GREEN}{NO_GAPS_MESSAGE}{RESET}\n"));
    } else {
        for row in keyword_grid(&result.missing_keywords) {
            out.push_str("  ");
            for keyword in row {
                out.push_str(&format!("{RED}●{RESET} {keyword:<width$}", width = GRID_CELL_WIDTH));
            }
            // Trailing pad of the last cell is cosmetic noise; drop it
            while out.ends_with(' ') {
                out.pop();
            }
            out.push('\n');
        }
    }

    out
}

/// 20-slot progress bar, one filled slot per 5 score points.
fn progress_bar(score: u32) -> String {
    let filled = (score.min(100) / 5) as usize;
    format!("[{}{}]", "█".repeat(filled), "·".repeat(20 - filled))
}
