//! benchgraph: render comparison charts from chess move-generator benchmark results.
//!
//! Reads a `benchmark_data.csv` of (name, test, m_nps) rows and draws either an
//! average-throughput bar chart (one bar per generator) or a per-test grouped bar
//! chart (one bar group per benchmark position).

pub mod app;
pub mod chart;
pub mod domain;
pub mod io;
pub mod prelude;
