use std::path::Path;

use benchgraph::prelude::*;

/// Results file written by the perft benchmark runner
const INPUT_FILE: &str = "benchmark_data.csv";

fn main() {
    CliApp::new("benchgraph").run(parse_args, run_render);
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<ChartKind, AppError> {
    match args.len() {
        // No mode word: draw the average chart
        1 => Ok(ChartKind::Average),
        2 => args[1]
            .parse::<ChartKind>()
            .map_err(|e| AppError::InvalidArguments(e.to_string())),
        _ => Err(AppError::InvalidArguments(
            "Usage: benchgraph [average|per-test]".to_string(),
        )),
    }
}

/// Main application logic - loads the benchmark table and renders one chart
fn run_render(kind: ChartKind) -> Result<(), AppError> {
    let table = load_table(INPUT_FILE)?;
    render(kind, &table, Path::new(kind.output_file()))?;
    Ok(())
}
