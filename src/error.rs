use std::path::PathBuf;
use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please select a JSON file first.")]
    NoFileSelected,

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("An upload is already in progress.")]
    UploadInProgress,

    #[error("Upload cancelled.")]
    Cancelled,

    #[error("HTTP client error: {0}")]
    Client(#[from] rquest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// The review file parsed, but does not have the shape the analysis service accepts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("JSON must be an array of review objects.")]
    NotAnArray,

    /// `index` is the first element that failed the field check.
    #[error("Each review must contain 'Review_Text' and 'Rating'.")]
    MissingFields { index: usize },
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Network Error: {0}")]
    Transport(#[source] rquest::Error),

    #[error("Request failed with status code {}{}", .status.as_u16(), detail_suffix(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Invalid response from analysis service: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("Failed to encode analysis request: {0}")]
    Encode(#[source] serde_json::Error),
}

fn detail_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {}", message),
        None => String::new(),
    }
}

/// Coarse classification used by the presenter to pick per-kind messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Read,
    Parse,
    Shape,
    Network,
    Busy,
    Cancelled,
    Setup,
}

impl ErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "no file",
            ErrorKind::Read => "unreadable file",
            ErrorKind::Parse => "invalid JSON",
            ErrorKind::Shape => "invalid reviews",
            ErrorKind::Network => "network",
            ErrorKind::Busy => "busy",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::Setup => "setup",
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoFileSelected => ErrorKind::Validation,
            Error::Read { .. } => ErrorKind::Read,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Shape(_) => ErrorKind::Shape,
            Error::Network(_) => ErrorKind::Network,
            Error::UploadInProgress => ErrorKind::Busy,
            Error::Cancelled => ErrorKind::Cancelled,
            Error::Client(_) | Error::Config(_) => ErrorKind::Setup,
        }
    }
}
