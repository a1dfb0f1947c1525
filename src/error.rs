use thiserror::Error;

/// Error type shared by the streaming core, persistence and export.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("buffer is empty")]
    EmptyBufferAccess,

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T, E = StreamError> = std::result::Result<T, E>;
