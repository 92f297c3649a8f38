use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use super::error::ChartError;
use super::palette::series_color;
use crate::domain::{AverageSummary, BenchmarkTable};

const CHART_SIZE: (u32, u32) = (800, 400);
const BAR_HALF_WIDTH: f64 = 0.4;

const TITLE_FONT_SIZE: u32 = 24;
const AXIS_LABEL_FONT_SIZE: u32 = 16;
const TICK_LABEL_FONT_SIZE: u32 = 14;
const DATA_LABEL_FONT_SIZE: u32 = 13;

/// Render the average-throughput bar chart: one bar per generator, height =
/// mean `m_nps` across all its test positions, value annotated above the bar.
pub fn render(table: &BenchmarkTable, path: &Path) -> Result<(), ChartError> {
    let summary = AverageSummary::from_table(table)?;
    let entries = summary.entries();
    let num_bars = entries.len();

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(ChartError::backend)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Efficiency of Rust Chess Move Generators",
            ("sans-serif", TITLE_FONT_SIZE),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(
            -0.5..(num_bars as f64 - 0.5),
            0.0..summary.y_axis_upper(),
        )
        .map_err(ChartError::backend)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_bars)
        .x_label_formatter(&|x| {
            // Segmented axis: one tick per bar center, blank elsewhere
            let idx = x.round();
            if idx >= 0.0 && (x - idx).abs() < 0.3 {
                entries
                    .get(idx as usize)
                    .map(|e| e.name.clone())
                    .unwrap_or_default()
            } else {
                String::new()
            }
        })
        .x_desc("Crate")
        .y_desc("Avg Millions Nodes/Sec (higher is better)")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(ChartError::backend)?;

    chart
        .draw_series(entries.iter().enumerate().map(|(idx, entry)| {
            Rectangle::new(
                [
                    (idx as f64 - BAR_HALF_WIDTH, 0.0),
                    (idx as f64 + BAR_HALF_WIDTH, entry.mean_mnps),
                ],
                series_color(0).filled(),
            )
        }))
        .map_err(ChartError::backend)?;

    // Value annotations, centered above each bar top
    let label_style = TextStyle::from(("sans-serif", DATA_LABEL_FONT_SIZE))
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(entries.iter().enumerate().map(|(idx, entry)| {
            Text::new(
                entry.label(),
                (idx as f64, entry.mean_mnps),
                label_style.clone(),
            )
        }))
        .map_err(ChartError::backend)?;

    root.present().map_err(ChartError::backend)?;
    info!(path = %path.display(), bars = num_bars, "wrote average throughput chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BenchmarkRecord, DomainError};

    fn record(name: &str, test: u32, m_nps: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            name: name.to_string(),
            test,
            m_nps,
        }
    }

    #[test]
    fn writes_svg_for_valid_table() {
        let table = BenchmarkTable::new(vec![
            record("chessie", 1, 10.0),
            record("chessie", 2, 20.0),
            record("shakmaty", 1, 30.0),
        ]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avg.svg");

        render(&table, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
        assert!(contents.contains("Efficiency of Rust Chess Move Generators"));
    }

    #[test]
    fn empty_table_fails_before_touching_disk() {
        let table = BenchmarkTable::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avg.svg");

        let err = render(&table, &path).unwrap_err();
        assert!(matches!(err, ChartError::Domain(DomainError::EmptyTable)));
    }
}
