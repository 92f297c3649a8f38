//! Prelude module for convenient imports
//!
//! Import everything you need with: `use benchgraph::prelude::*;`

// Domain types
pub use crate::domain::{
    AverageEntry, AverageSummary, BenchmarkRecord, BenchmarkTable, DomainError, PivotTable,
};

// IO types
pub use crate::io::{IoError, load_table, read_table};

// Chart types
pub use crate::chart::{ChartError, ChartKind, render};

// App types
pub use crate::app::{AppError, CliApp};
