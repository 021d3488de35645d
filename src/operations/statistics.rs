//! Statistical analysis operations for RealBuffer.
//!
//! This module implements the [`BufferStatistics`] trait using ndarray
//! reductions, plus free functions of the same names for callers that
//! prefer `mean(&buf)` over `buf.mean()`.

use super::traits::BufferStatistics;
use super::types::Extremum;
use crate::{BufferError, BufferResult, RealBuffer, RealFloat, to_precision};

fn require_samples<T: RealFloat>(
    buffer: &RealBuffer<T>,
    operation: &'static str,
    required: usize,
) -> BufferResult<()> {
    match buffer.len() {
        0 => Err(BufferError::EmptyBuffer { operation }),
        n if n < required => Err(BufferError::InsufficientSamples {
            operation,
            required,
            actual: n,
        }),
        _ => Ok(()),
    }
}

/// Scans for the extremum that `better` prefers, keeping the leftmost on ties.
fn extremum_by<T, F>(buffer: &RealBuffer<T>, operation: &'static str, better: F) -> BufferResult<Extremum<T>>
where
    T: RealFloat,
    F: Fn(T, T) -> bool,
{
    let mut iter = buffer.iter().copied().enumerate();
    let (index, value) = iter.next().ok_or(BufferError::EmptyBuffer { operation })?;
    let (index, value) = iter.fold((index, value), |(best_i, best), (i, x)| {
        if better(x, best) { (i, x) } else { (best_i, best) }
    });
    Ok(Extremum { value, index })
}

impl<T: RealFloat> BufferStatistics<T> for RealBuffer<T> {
    fn sum(&self) -> T {
        self.data.sum()
    }

    fn mean(&self) -> BufferResult<T> {
        require_samples(self, "mean", 1)?;
        Ok(self.sum() / to_precision::<T, _>(self.len()))
    }

    /// Computes the unbiased sample variance.
    ///
    /// Variance = sum((x - mean(x))^2) / (N - 1)
    fn var(&self) -> BufferResult<T> {
        require_samples(self, "var", 2)?;
        let mean = self.mean()?;
        let squared_deviations = self.data.fold(T::zero(), |acc, &x| {
            let d = x - mean;
            acc + d * d
        });
        Ok(squared_deviations / to_precision::<T, _>(self.len() - 1))
    }

    fn std_dev(&self) -> BufferResult<T> {
        Ok(self.var()?.sqrt())
    }

    /// Sorts a copy of the samples under IEEE-754 `totalOrder`: positive NaN
    /// lands after `+inf`, negative NaN before `-inf`.
    fn median(&self) -> BufferResult<T> {
        require_samples(self, "median", 1)?;
        let mut sorted = self.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Ok(sorted[mid])
        } else {
            let two: T = to_precision(2);
            Ok((sorted[mid - 1] + sorted[mid]) / two)
        }
    }

    /// RMS = sqrt(mean(x^2))
    fn rms(&self) -> BufferResult<T> {
        require_samples(self, "rms", 1)?;
        let mean_square = self.data.fold(T::zero(), |acc, &x| acc + x * x) / to_precision::<T, _>(self.len());
        Ok(mean_square.sqrt())
    }

    fn min(&self) -> BufferResult<T> {
        Ok(self.min_with_index()?.value)
    }

    fn max(&self) -> BufferResult<T> {
        Ok(self.max_with_index()?.value)
    }

    fn min_with_index(&self) -> BufferResult<Extremum<T>> {
        extremum_by(self, "min", |x, best| x < best)
    }

    fn max_with_index(&self) -> BufferResult<Extremum<T>> {
        extremum_by(self, "max", |x, best| x > best)
    }

    fn find(&self, value: T) -> Option<usize> {
        self.iter().position(|&x| x == value)
    }
}

/// Arithmetic sum of all samples.
pub fn sum<T: RealFloat>(buffer: &RealBuffer<T>) -> T {
    buffer.sum()
}

/// Arithmetic mean of all samples. See [`BufferStatistics::mean`].
pub fn mean<T: RealFloat>(buffer: &RealBuffer<T>) -> BufferResult<T> {
    buffer.mean()
}

/// Unbiased sample variance. See [`BufferStatistics::var`].
pub fn var<T: RealFloat>(buffer: &RealBuffer<T>) -> BufferResult<T> {
    buffer.var()
}

/// Sample standard deviation. See [`BufferStatistics::std_dev`].
pub fn std_dev<T: RealFloat>(buffer: &RealBuffer<T>) -> BufferResult<T> {
    buffer.std_dev()
}

/// Median of the samples. See [`BufferStatistics::median`].
pub fn median<T: RealFloat>(buffer: &RealBuffer<T>) -> BufferResult<T> {
    buffer.median()
}

/// Root mean square of the samples.
pub fn rms<T: RealFloat>(buffer: &RealBuffer<T>) -> BufferResult<T> {
    buffer.rms()
}

/// Smallest sample value.
pub fn min<T: RealFloat>(buffer: &RealBuffer<T>) -> BufferResult<T> {
    BufferStatistics::min(buffer)
}

/// Largest sample value.
pub fn max<T: RealFloat>(buffer: &RealBuffer<T>) -> BufferResult<T> {
    BufferStatistics::max(buffer)
}

/// Smallest sample value and its first index.
pub fn min_with_index<T: RealFloat>(buffer: &RealBuffer<T>) -> BufferResult<Extremum<T>> {
    buffer.min_with_index()
}

/// Largest sample value and its first index.
pub fn max_with_index<T: RealFloat>(buffer: &RealBuffer<T>) -> BufferResult<Extremum<T>> {
    buffer.max_with_index()
}

/// Index of the first sample equal to `value`.
pub fn find<T: RealFloat>(buffer: &RealBuffer<T>, value: T) -> Option<usize> {
    buffer.find(value)
}
