use thiserror::Error;

/// Errors raised while turning statement records into a voucher export
#[derive(Error, Debug)]
pub enum ExportError {
    /// A record's date could not be read as a calendar date (`record` is 1-based)
    #[error("Invalid date at record {record}: {value:?}")]
    DateFormat { record: usize, value: String },

    /// A required statement column is absent
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// An amount cell is not a decimal number (`record` is 1-based)
    #[error("Invalid amount at record {record}: {value:?}")]
    InvalidAmount { record: usize, value: String },

    /// Statement content could not be parsed (detail in the message)
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was called without content or a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ExportResult<T> = Result<T, ExportError>;
