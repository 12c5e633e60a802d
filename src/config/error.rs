use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("wavelengths should be finite, strictly increasing and non-empty")]
    Wavelengths,

    #[error("threads should be greater than 0")]
    Threads,

    #[error("nodata should be a finite value")]
    Nodata,
}
