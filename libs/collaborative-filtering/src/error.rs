//! Error types for collaborative filtering

use thiserror::Error;

/// Collaborative filtering errors
///
/// Missing data is not an error here: unknown users, unrated items and
/// degenerate similarity inputs all yield a `0.0` prediction instead.
#[derive(Error, Debug)]
pub enum CfError {
    /// A required constructor argument was not supplied
    #[error("Invalid argument: {0} is required")]
    InvalidArgument(String),

    /// Configuration values out of range
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Environment variables could not be parsed into a config
    #[error("Environment error: {0}")]
    Env(#[from] envy::Error),
}

pub type Result<T> = std::result::Result<T, CfError>;
