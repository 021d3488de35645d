//! Core trait definitions for buffer operations.
//!
//! Each trait covers one layer of the crate and is implemented for
//! [`RealBuffer<T>`](crate::RealBuffer). Mutating methods work in place;
//! every operation also has a pure free function of the same name in its
//! implementation module that returns a new buffer instead.

use super::types::{ConvMode, Extremum};
use crate::{BufferResult, RealFloat};

/// Read-only statistical reductions over a buffer.
pub trait BufferStatistics<T: RealFloat> {
    /// Arithmetic sum of all samples. Zero for an empty buffer.
    fn sum(&self) -> T;

    /// Arithmetic mean of all samples.
    ///
    /// # Errors
    /// Returns an error if the buffer is empty.
    fn mean(&self) -> BufferResult<T>;

    /// Unbiased sample variance: squared deviations from the mean divided by `N - 1`.
    ///
    /// # Errors
    /// Returns an error if the buffer has fewer than two samples.
    fn var(&self) -> BufferResult<T>;

    /// Square root of [`var`](Self::var).
    ///
    /// # Errors
    /// Returns an error if the buffer has fewer than two samples.
    fn std_dev(&self) -> BufferResult<T>;

    /// Middle value of a sorted copy of the samples; the mean of the two
    /// middle values for an even count. The buffer itself is not reordered.
    ///
    /// NaN samples take part in the sort under IEEE-754 total ordering, so
    /// positive NaNs sort above `+inf` and negative NaNs below `-inf`.
    ///
    /// # Errors
    /// Returns an error if the buffer is empty.
    fn median(&self) -> BufferResult<T>;

    /// Root mean square of the samples.
    ///
    /// # Errors
    /// Returns an error if the buffer is empty.
    fn rms(&self) -> BufferResult<T>;

    /// Smallest sample value.
    ///
    /// # Errors
    /// Returns an error if the buffer is empty.
    fn min(&self) -> BufferResult<T>;

    /// Largest sample value.
    ///
    /// # Errors
    /// Returns an error if the buffer is empty.
    fn max(&self) -> BufferResult<T>;

    /// Smallest sample value and the index of its first occurrence.
    ///
    /// # Errors
    /// Returns an error if the buffer is empty.
    fn min_with_index(&self) -> BufferResult<Extremum<T>>;

    /// Largest sample value and the index of its first occurrence.
    ///
    /// # Errors
    /// Returns an error if the buffer is empty.
    fn max_with_index(&self) -> BufferResult<Extremum<T>>;

    /// Index of the first sample exactly equal to `value`.
    fn find(&self, value: T) -> Option<usize>;
}

/// Elementwise math applied in place.
///
/// Domain errors (log of zero, negative base with fractional exponent)
/// follow IEEE-754 and produce `-inf` or `NaN` rather than an error.
pub trait BufferProcessing<T: RealFloat> {
    /// Replaces every sample with its absolute value.
    fn abs(&mut self) -> &mut Self;

    /// Replaces every sample `x` with `e^x`.
    fn exp(&mut self) -> &mut Self;

    /// Natural logarithm of every sample.
    fn log(&mut self) -> &mut Self;

    /// Natural logarithm of every sample. Alias of [`log`](Self::log).
    fn ln(&mut self) -> &mut Self;

    /// Base-10 logarithm of every sample.
    fn log10(&mut self) -> &mut Self;

    /// Raises every sample to `exponent`.
    fn pow(&mut self, exponent: T) -> &mut Self;

    /// Clamps every sample into `[-|limit|, |limit|]`.
    fn saturate(&mut self, limit: T) -> &mut Self;
}

/// Structural transforms that reorder, resize or re-rate the samples.
pub trait BufferEditing<T: RealFloat> {
    /// Reverses sample order in place.
    fn reverse(&mut self) -> &mut Self;

    /// Circular shift. Positive `n` rotates left: the sample at
    /// `n mod len` becomes index 0. Negative `n` rotates right.
    fn rotate(&mut self, n: isize) -> &mut Self;

    /// Truncates, or grows with trailing zeros, to `new_len` samples.
    fn resize(&mut self, new_len: usize) -> &mut Self;

    /// Appends `n` zero samples.
    fn pad(&mut self, n: usize) -> &mut Self;

    /// Zero-stuffs to `len * factor` samples, placing sample `i` at
    /// `i * factor + phase`.
    ///
    /// # Errors
    /// Returns an error if `factor` is zero, `phase >= factor`, or the
    /// stuffed length overflows `usize`.
    fn upsample(&mut self, factor: usize, phase: usize) -> BufferResult<&mut Self>;

    /// Keeps the samples at `phase, phase + factor, phase + 2 * factor, ...`.
    ///
    /// # Errors
    /// Returns an error if `factor` is zero or `phase >= factor`.
    fn downsample(&mut self, factor: usize, phase: usize) -> BufferResult<&mut Self>;

    /// First difference, `x[i + 1] - x[i]`. The buffer shrinks by one sample.
    fn diff(&mut self) -> &mut Self;

    /// Length-preserving first difference seeded with `previous`, so that
    /// successive segments of one stream can be differenced independently.
    ///
    /// Returns the value to seed the next segment with: the last original
    /// sample, or `previous` itself if the buffer is empty.
    fn running_diff(&mut self, previous: T) -> T;

    /// Running sum seeded with `previous`. Returns the final running total
    /// for seeding the next segment.
    fn cumsum(&mut self, previous: T) -> T;
}

/// FIR filtering and sample-rate conversion.
///
/// The taps buffer is borrowed immutably, so a buffer can never be used as
/// both signal and taps of one call. All operations replace the signal's
/// contents with the filtered output; an empty signal stays empty.
pub trait BufferFiltering<T: RealFloat> {
    /// Linear convolution with `taps`.
    ///
    /// # Errors
    /// Returns an error if `taps` is empty.
    fn conv(&mut self, taps: &Self, mode: ConvMode) -> BufferResult<()>;

    /// Full convolution followed by keeping every `rate`-th sample from index 0.
    ///
    /// # Errors
    /// Returns an error if `taps` is empty or `rate` is zero.
    fn decimate(&mut self, rate: usize, taps: &Self) -> BufferResult<()>;

    /// Zero-phase upsampling by `rate` followed by full convolution, without
    /// the trailing `rate - 1` samples that only see stuffed zeros.
    ///
    /// # Errors
    /// Returns an error if `taps` is empty, `rate` is zero, or the output
    /// length overflows `usize`.
    fn interp(&mut self, rate: usize, taps: &Self) -> BufferResult<()>;

    /// Interpolation by `interp_rate` followed by decimation by `decimate_rate`.
    ///
    /// # Errors
    /// Returns an error if `taps` is empty, either rate is zero, or the
    /// interpolated length overflows `usize`.
    fn resample(&mut self, interp_rate: usize, decimate_rate: usize, taps: &Self)
        -> BufferResult<()>;
}
