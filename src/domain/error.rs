use thiserror::Error;

/// Domain-level errors for the benchmark table transformations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("benchmark table is empty; nothing to draw")]
    EmptyTable,

    #[error("duplicate measurement for generator `{name}` on test {test}")]
    DuplicateMeasurement { name: String, test: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            DomainError::EmptyTable.to_string(),
            "benchmark table is empty; nothing to draw"
        );
        assert_eq!(
            DomainError::DuplicateMeasurement {
                name: "shakmaty".to_string(),
                test: 7,
            }
            .to_string(),
            "duplicate measurement for generator `shakmaty` on test 7"
        );
    }

    #[test]
    fn error_is_cloneable() {
        let err = DomainError::EmptyTable;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
