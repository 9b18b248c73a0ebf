/// Fatal problems with an issue export. Any of these aborts the run before aggregation.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Row {row}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
