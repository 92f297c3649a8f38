use std::io;
use thiserror::Error;

use crate::chart::ChartError;
use crate::domain::DomainError;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV IO error: {0}")]
    CsvIo(#[from] IoError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            AppError::InvalidArguments("unknown chart".to_string()).to_string(),
            "Invalid arguments: unknown chart"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_err = AppError::from(io_err);

        match app_err {
            AppError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn domain_error_conversion() {
        let app_err = AppError::from(DomainError::EmptyTable);

        match app_err {
            AppError::Domain(DomainError::EmptyTable) => {}
            _ => panic!("Expected Domain error variant"),
        }
    }

    #[test]
    fn chart_error_conversion() {
        let app_err = AppError::from(ChartError::UnknownKind("pie".to_string()));

        match app_err {
            AppError::Chart(ChartError::UnknownKind(_)) => {}
            _ => panic!("Expected Chart error variant"),
        }
    }
}
