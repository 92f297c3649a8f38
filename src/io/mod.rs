pub mod csv_reader;
pub mod error;

// Re-export commonly used types
pub use csv_reader::{load_table, read_table};
pub use error::IoError;
