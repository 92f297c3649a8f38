/// Headroom factor above the tallest bar, leaves room for annotations.
pub(crate) const Y_AXIS_HEADROOM: f64 = 1.1;

pub mod error;
pub mod pivot;
pub mod record;
pub mod summary;

// Re-export commonly used types
pub use error::DomainError;
pub use pivot::PivotTable;
pub use record::{BenchmarkRecord, BenchmarkTable};
pub use summary::{AverageEntry, AverageSummary};
