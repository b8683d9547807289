use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pixseq operations
#[derive(Error, Diagnostic, Debug)]
pub enum PixseqError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pixseq::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pixseq::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pixseq::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid channel type: {0}")]
    #[diagnostic(
        code(pixseq::channel_type),
        help("Use one of: prime, triangular, random, custom")
    )]
    InvalidChannelType(String),

    #[error("Invalid rotation: {0}")]
    #[diagnostic(code(pixseq::rotation), help("Use \"0\" or \"90\""))]
    InvalidRotation(String),

    #[error("Validation error: {message}")]
    #[diagnostic(code(pixseq::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(pixseq::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Watch error: {0}")]
    #[diagnostic(code(pixseq::watch))]
    Watch(#[from] notify::Error),
}

pub type Result<T> = std::result::Result<T, PixseqError>;
