use miette::Diagnostic;
use thiserror::Error;

/// Main error type for grove operations
#[derive(Error, Diagnostic, Debug)]
pub enum GroveError {
    #[error("IO error: {0}")]
    #[diagnostic(code(grove::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(grove::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(grove::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Load error: {message}")]
    #[diagnostic(code(grove::load))]
    Load {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(grove::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GroveError>;
