//! Error types for the ubique helpers
//!
//! Provides a unified error type for all ubique crates.

use thiserror::Error;

/// Core error type shared by every ubique function
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Required input missing or empty, arity too low, or an invalid selector
    #[error("Argument error: {0}")]
    Argument(String),

    /// Non-rectangular matrix, mismatched operand shapes, non-square input,
    /// or an index outside the container
    #[error("Shape error: {0}")]
    Shape(String),

    /// Date string without a pattern, unparseable date text, or an input
    /// kind the function does not accept
    #[error("Format error: {0}")]
    Format(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for missing or empty input
    pub fn not_enough_input(context: &str) -> Self {
        Self::Argument(format!("not enough input arguments for {context}"))
    }

    /// Create an error for a matrix whose rows differ in length
    pub fn ragged_rows(row: usize, expected: usize, actual: usize) -> Self {
        Self::Shape(format!(
            "All rows in the matrix must have the same length: row {row} has {actual}, expected {expected}"
        ))
    }

    /// Create an error for operands whose shapes cannot be paired
    pub fn shape_mismatch(
        left: crate::Shape,
        right: crate::Shape,
        context: &str,
    ) -> Self {
        Self::Shape(format!(
            "Dimensions must agree in {context}: {left} vs {right}"
        ))
    }

    /// Create an error for a non-square matrix
    pub fn not_square(rows: usize, cols: usize) -> Self {
        Self::Shape(format!("Matrix must be square, got {rows}x{cols}"))
    }

    /// Create an error for an index beyond the container bounds
    pub fn index_out_of_bounds(index: usize, len: usize, axis: &str) -> Self {
        Self::Shape(format!(
            "{axis} index must be an integer between 0 and {}, got {index}",
            len.saturating_sub(1)
        ))
    }

    /// Create an error for a date string supplied without a pattern
    pub fn missing_format() -> Self {
        Self::Format("Insert format for date string".to_string())
    }
}
