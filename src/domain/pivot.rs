use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::error::DomainError;
use super::record::BenchmarkTable;

/// Benchmark records reshaped to wide form: rows = test positions,
/// columns = generators, cells = `m_nps`.
///
/// Construction fails on a duplicate (name, test) pair rather than silently
/// collapsing rows. A missing combination is an empty cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    tests: Vec<u32>,
    names: Vec<String>,
    cells: BTreeMap<(u32, String), f64>,
}

impl PivotTable {
    pub fn from_table(table: &BenchmarkTable) -> Result<Self, DomainError> {
        if table.is_empty() {
            return Err(DomainError::EmptyTable);
        }

        let mut cells = BTreeMap::new();
        let mut tests = BTreeSet::new();
        let mut names = BTreeSet::new();

        for record in table.records() {
            let key = (record.test, record.name.clone());
            if cells.insert(key, record.m_nps).is_some() {
                return Err(DomainError::DuplicateMeasurement {
                    name: record.name.clone(),
                    test: record.test,
                });
            }
            tests.insert(record.test);
            names.insert(record.name.clone());
        }

        let pivot = Self {
            tests: tests.into_iter().collect(),
            names: names.into_iter().collect(),
            cells,
        };
        debug!(
            tests = pivot.tests.len(),
            generators = pivot.names.len(),
            "pivoted benchmark table"
        );
        Ok(pivot)
    }

    /// Distinct test ids, ascending
    pub fn tests(&self) -> &[u32] {
        &self.tests
    }

    /// Distinct generator names, ascending
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Cell lookup; `None` when the generator has no measurement for the test
    pub fn value(&self, test: u32, name: &str) -> Option<f64> {
        self.cells.get(&(test, name.to_string())).copied()
    }

    /// Largest cell value. Construction rejects empty tables, so at least one
    /// cell always exists.
    pub fn max_value(&self) -> f64 {
        self.cells.values().copied().fold(f64::MIN, f64::max)
    }

    /// Upper bound of the y-axis: 1.1 x the largest cell
    pub fn y_axis_upper(&self) -> f64 {
        self.max_value() * super::Y_AXIS_HEADROOM
    }
}
