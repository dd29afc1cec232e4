use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for edge list loading operations.
#[derive(Error, Debug)]
pub enum EdgeLoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the input holds no edge records at all.
    #[error("No edge records found in '{0}'")]
    NoEdgesFound(String),
}
