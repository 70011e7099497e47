use miette::Diagnostic;
use thiserror::Error;

/// Main error type for shotkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShotError {
    #[error("IO error: {0}")]
    #[diagnostic(code(shotkit::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(shotkit::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(shotkit::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(shotkit::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid geometry: {message}")]
    #[diagnostic(code(shotkit::geometry))]
    Geometry { message: String },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(shotkit::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Deck error: {message}")]
    #[diagnostic(code(shotkit::deck))]
    Deck {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(shotkit::batch))]
    Batch { message: String },
}

pub type Result<T> = std::result::Result<T, ShotError>;
