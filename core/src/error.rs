//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The flow document could not be deserialized: not JSON, or a required
    /// field is missing at some level. We ignore this for `From<String>` so
    /// that construction stays explicit at the deserialization edge.
    #[from(ignore)]
    #[display("Input Error: {_0}")]
    Input(String),

    /// The produced document cannot be represented in the output format.
    #[display("Serialization Error: {_0}")]
    Serialization(serde_yaml::Error),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
