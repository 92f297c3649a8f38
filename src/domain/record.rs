use serde::Deserialize;

/// One benchmark measurement: a move generator ran one test position
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkRecord {
    /// Move-generator crate under test
    pub name: String,
    /// Benchmark position identifier
    pub test: u32,
    /// Millions of nodes processed per second
    pub m_nps: f64,
}

/// Immutable in-memory table of benchmark records
///
/// Loaded once by the entry point and read (never mutated) by both renderers.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkTable {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkTable {
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, test: u32, m_nps: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            name: name.to_string(),
            test,
            m_nps,
        }
    }

    #[test]
    fn table_exposes_records_in_load_order() {
        let table = BenchmarkTable::new(vec![
            record("chessie", 1, 10.0),
            record("shakmaty", 1, 20.0),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].name, "chessie");
        assert_eq!(table.records()[1].name, "shakmaty");
    }

    #[test]
    fn empty_table() {
        let table = BenchmarkTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
