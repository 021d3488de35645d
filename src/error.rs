//! Error types and result utilities for buffer operations.

use thiserror::Error;

/// Convenience type alias for results that may contain a [`BufferError`].
pub type BufferResult<T> = Result<T, BufferError>;

/// Error types that can occur during buffer operations.
///
/// Normal numeric edge cases (division by zero, logarithm of a negative
/// value) are not errors; they follow IEEE-754 semantics. Only contract
/// violations that would otherwise produce a meaningless result are reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Two buffers combined elementwise have different lengths.
    #[error("Size mismatch in {operation}: left buffer has {left} samples, right buffer has {right}")]
    SizeMismatch {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// The operation needs at least one sample.
    #[error("Cannot compute {operation} on an empty buffer")]
    EmptyBuffer {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    /// The operation needs more samples than the buffer holds.
    #[error("{operation} requires at least {required} samples, buffer has {actual}")]
    InsufficientSamples {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Minimum number of samples required.
        required: usize,
        /// Number of samples present.
        actual: usize,
    },

    /// A filtering operation received an empty taps buffer.
    #[error("{operation} requires at least one filter tap")]
    EmptyTaps {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    /// A rate or factor argument was zero.
    #[error("Invalid {parameter} for {operation}: {value} (must be >= 1)")]
    InvalidRate {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Name of the offending argument.
        parameter: &'static str,
        /// The value that was passed.
        value: usize,
    },

    /// Error that occurs when invalid parameters are provided to an operation.
    #[error("Invalid parameter error: {0}")]
    InvalidParameter(String),

    /// The backing array rejected a shape change.
    #[error("Array layout error: {0}")]
    Layout(String),

    /// A source value could not be represented in the buffer's sample type.
    #[error("Sample conversion error: cannot represent {value} as {target}")]
    ConversionError {
        /// Debug rendering of the source value.
        value: String,
        /// Name of the target sample type.
        target: &'static str,
    },
}

impl BufferError {
    /// Creates an [`BufferError::InvalidParameter`] from a parameter name and reason.
    pub fn invalid_parameter(name: &str, reason: impl AsRef<str>) -> Self {
        Self::InvalidParameter(format!("{name}: {}", reason.as_ref()))
    }
}
