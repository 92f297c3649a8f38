use std::collections::BTreeMap;

use tracing::debug;

use super::Y_AXIS_HEADROOM;
use super::error::DomainError;
use super::record::BenchmarkTable;

/// Mean throughput for one generator across all its test positions
#[derive(Debug, Clone, PartialEq)]
pub struct AverageEntry {
    pub name: String,
    pub mean_mnps: f64,
}

impl AverageEntry {
    /// Annotation text drawn above the bar, e.g. "15.00"
    pub fn label(&self) -> String {
        format!("{:.2}", self.mean_mnps)
    }
}

/// Per-generator arithmetic means, ordered by generator name
#[derive(Debug, Clone, PartialEq)]
pub struct AverageSummary {
    entries: Vec<AverageEntry>,
}

impl AverageSummary {
    /// Group records by generator name and average `m_nps` within each group.
    ///
    /// Entries come out in ascending name order, so equal means keep a stable,
    /// deterministic bar order.
    pub fn from_table(table: &BenchmarkTable) -> Result<Self, DomainError> {
        if table.is_empty() {
            return Err(DomainError::EmptyTable);
        }

        let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for record in table.records() {
            let (sum, count) = groups.entry(record.name.as_str()).or_insert((0.0, 0));
            *sum += record.m_nps;
            *count += 1;
        }

        let entries = groups
            .into_iter()
            .map(|(name, (sum, count))| AverageEntry {
                name: name.to_string(),
                mean_mnps: sum / count as f64,
            })
            .collect::<Vec<_>>();

        debug!(generators = entries.len(), "computed average summary");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[AverageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tallest mean in the summary. The constructor rejects empty tables, so
    /// at least one entry always exists.
    pub fn max_mean(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.mean_mnps)
            .fold(f64::MIN, f64::max)
    }

    /// Upper bound of the y-axis: 1.1 x the tallest mean
    pub fn y_axis_upper(&self) -> f64 {
        self.max_mean() * Y_AXIS_HEADROOM
    }
}
