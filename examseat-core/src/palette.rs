//! Paper colors for grid visualization.

use serde::Serialize;

use crate::models::RosterEntry;

/// Color cycle assigned to papers in first-seen order
pub const PAPER_COLORS: [&str; 10] = [
    "#d62728", "#ff7f0e", "#2ca02c", "#1f77b4", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Fallback color for papers not in the palette
pub const UNKNOWN_PAPER_COLOR: &str = "#000000";

/// Stable mapping from paper code to a display color
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaperPalette {
    papers: Vec<String>,
}

impl PaperPalette {
    /// Assigns colors to the papers of a roster, cycling after ten papers
    #[must_use]
    pub fn from_roster(roster: &[RosterEntry]) -> Self {
        let mut papers: Vec<String> = Vec::new();
        for entry in roster {
            if !papers.contains(&entry.paper_code) {
                papers.push(entry.paper_code.clone());
            }
        }
        Self { papers }
    }

    /// Position of a paper in the color cycle
    #[must_use]
    pub fn slot(&self, paper: &str) -> Option<usize> {
        self.papers
            .iter()
            .position(|p| p == paper)
            .map(|idx| idx % PAPER_COLORS.len())
    }

    /// Hex color of a paper
    #[must_use]
    pub fn color(&self, paper: &str) -> &'static str {
        self.slot(paper)
            .map_or(UNKNOWN_PAPER_COLOR, |slot| PAPER_COLORS[slot])
    }

    /// Paper codes in palette order
    pub fn papers(&self) -> impl Iterator<Item = &str> {
        self.papers.iter().map(String::as_str)
    }
}
