//! Supporting types for buffer operations.
//!
//! Small value types returned by, or passed to, the operation traits.

/// How much of a linear convolution to keep.
///
/// For a signal of `N` samples and `M` taps the full convolution has
/// `N + M - 1` samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvMode {
    /// Keep all `N + M - 1` output samples.
    #[default]
    Full,
    /// Keep the central `N` samples, starting at `(M - 1) / 2` of the full
    /// result. Head and tail transients are trimmed around the filter's
    /// group delay so the output lines up with the input.
    Trimmed,
}

impl ConvMode {
    /// Maps the legacy `trim_to_input_size` flag onto a mode.
    pub const fn from_trim(trim_to_input_size: bool) -> Self {
        if trim_to_input_size {
            ConvMode::Trimmed
        } else {
            ConvMode::Full
        }
    }

    /// Returns true if only the central samples are kept.
    pub const fn is_trimmed(&self) -> bool {
        matches!(self, ConvMode::Trimmed)
    }
}

/// An extreme sample value together with the index it was found at.
///
/// Returned by `min_with_index` / `max_with_index`. On ties the index is
/// the leftmost occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extremum<T> {
    /// The extreme value.
    pub value: T,
    /// Index of the first sample holding `value`.
    pub index: usize,
}
