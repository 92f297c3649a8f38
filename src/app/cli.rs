use super::error::AppError;

/// Reusable CLI application runner that handles:
/// - Logging initialization (tracing to stderr)
/// - Argument collection and parsing
/// - Exit codes (0 = success, 1 = error)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Run the CLI application: parse arguments with `parse_fn`, hand the
    /// result to `main_fn`, print any error to stderr prefixed with the
    /// application name.
    ///
    /// This function never returns - it calls std::process::exit with the
    /// appropriate code
    pub fn run<T>(
        self,
        parse_fn: impl FnOnce(Vec<String>) -> Result<T, AppError>,
        main_fn: impl FnOnce(T) -> Result<(), AppError>,
    ) -> ! {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .init();

        let args: Vec<String> = std::env::args().collect();
        match parse_fn(args).and_then(main_fn) {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{}: {e}", self.name);
                std::process::exit(1);
            }
        }
    }
}
