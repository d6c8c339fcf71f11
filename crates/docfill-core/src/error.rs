use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocfillError {
    // Generation errors
    #[error("TEMPLATE_UNREADABLE: cannot open template '{}': {reason}", .path.display())]
    TemplateUnreadable { path: PathBuf, reason: String },

    #[error("OUTPUT_WRITE_ERROR: cannot write generated document '{}': {reason}", .path.display())]
    OutputWriteError { path: PathBuf, reason: String },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocfillError>;
