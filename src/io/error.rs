use std::io;
use thiserror::Error;

/// IO-level errors for loading the benchmark CSV
#[derive(Error, Debug)]
pub enum IoError {
    #[error("failed to open {path}: {source}")]
    Open { path: String, source: io::Error },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_the_path() {
        let err = IoError::Open {
            path: "benchmark_data.csv".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("benchmark_data.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let wrapped = IoError::from(io_err);

        match wrapped {
            IoError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }
}
