pub mod average;
pub mod error;
pub mod palette;

// Re-export commonly used types
pub use error::ChartError;

use std::path::Path;
use std::str::FromStr;

use crate::domain::BenchmarkTable;

/// Chart mode selector
///
/// One enumerated choice dispatched through [`render`], instead of toggling
/// call sites by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One bar per generator, height = mean `m_nps` across all tests
    Average,
    /// One bar group per test position, one bar per generator in each group
    PerTest,
}

impl ChartKind {
    /// Destination file for this chart mode
    pub fn output_file(&self) -> &'static str {
        match self {
            Self::Average => "avg_mnps.svg",
            Self::PerTest => "per_test_mnps.svg",
        }
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "average" | "avg" => Ok(Self::Average),
            "per-test" | "per_test" | "barcode" => Ok(Self::PerTest),
            _ => Err(ChartError::UnknownKind(s.to_string())),
        }
    }
}

/// Render the selected chart from the loaded table to an SVG file
pub fn render(kind: ChartKind, table: &BenchmarkTable, path: &Path) -> Result<(), ChartError> {
    match kind {
        ChartKind::Average => average::render(table, path),
        ChartKind::PerTest => per_test::render(table, path),
    }
}
