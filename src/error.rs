//! Error types for generation, grading and the lesson round.

/// Errors surfaced by the seismogram core and its I/O edges
#[derive(Debug, thiserror::Error)]
pub enum SeismoError {
    #[error("Invalid generation profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid grading tolerance: {0}")]
    InvalidTolerance(String),

    #[error("Invalid lesson transition: {0}")]
    InvalidTransition(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to encode plot: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to write WAV: {0}")]
    Wav(#[from] hound::Error),

    #[error("Malformed attempt record: {0}")]
    Record(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeismoError>;
