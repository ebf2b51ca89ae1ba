use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    /// A configured column does not exist in the loaded dataset
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A configured metric column is not classified as numeric
    #[error("Column '{0}' is not numeric (classified as {1})")]
    NotNumeric(String, String),

    /// Configuration value outside its valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// CSV parsing error from the underlying reader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File reading or IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
