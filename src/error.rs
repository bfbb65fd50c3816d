use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed KML document: {0}")]
    MalformedDocument(String),

    #[error("Invalid coordinate value '{value}': {reason}")]
    CoordinateParse { value: String, reason: String },

    #[error("KMZ archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("{failed} of {total} documents failed to convert")]
    BatchFailed { failed: usize, total: usize },
}

/// Coarse error category, for callers that only need to branch on the kind
/// of failure rather than its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedDocument,
    CoordinateParse,
    Input,
    Output,
    Config,
    Batch,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::MalformedDocument(_) => ErrorKind::MalformedDocument,
            ConversionError::CoordinateParse { .. } => ErrorKind::CoordinateParse,
            ConversionError::Io(_) | ConversionError::Zip(_) | ConversionError::InvalidInput(_) => {
                ErrorKind::Input
            }
            ConversionError::OutputExists(_) | ConversionError::Json(_) => ErrorKind::Output,
            ConversionError::Config(_) | ConversionError::Validation(_) => ErrorKind::Config,
            ConversionError::TaskJoin(_) | ConversionError::BatchFailed { .. } => ErrorKind::Batch,
        }
    }
}

impl From<quick_xml::Error> for ConversionError {
    fn from(err: quick_xml::Error) -> Self {
        ConversionError::MalformedDocument(err.to_string())
    }
}

impl From<config::ConfigError> for ConversionError {
    fn from(err: config::ConfigError) -> Self {
        ConversionError::Config(err.to_string())
    }
}
