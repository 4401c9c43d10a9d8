use thiserror::Error;

/// Main error type for intentgraph
#[derive(Error, Debug)]
pub enum IntentGraphError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors outside of intent records (e.g. agent.json)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An intent file that does not have the expected shape
    #[error("Malformed intent record in {path}: {message}")]
    MalformedIntent { path: String, message: String },

    /// Invalid command-line input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph drawing backend or viewer errors
    #[error("Render error: {0}")]
    Render(String),
}

/// Convenient Result type using IntentGraphError
pub type Result<T> = std::result::Result<T, IntentGraphError>;
