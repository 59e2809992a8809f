use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(ThisError, Debug)]
pub enum Error {
    /// The request could not be sent, or the response body was not valid JSON.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {name}: {message}")]
    FileRead { name: String, message: String },

    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
