//! Error types for the algorithm utilities

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    /// Pop or peek on a stack with no elements
    #[error("Stack is empty")]
    EmptyStack,

    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Geohash length outside 1..=12
    #[error("Invalid geohash precision: {0} (expected 1..=12)")]
    InvalidPrecision(usize),
}

pub type Result<T> = std::result::Result<T, AlgorithmError>;
