use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxgenError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unknown palette colour: {name}")]
    #[diagnostic(code(pxgen::palette))]
    UnknownColour {
        name: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PxgenError>;
