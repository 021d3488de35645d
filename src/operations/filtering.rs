//! FIR filtering and sample-rate conversion for RealBuffer.
//!
//! Convolution, decimation, interpolation and rational resampling all run
//! through one polyphase kernel. For a signal `x` of `N` samples, zero-stuffed
//! by a factor `up`, and taps `h` of `M` samples, output sample `k` is
//!
//! ```text
//! y[k] = sum x[j] * h[k - j * up]    for 0 <= j < N, 0 <= k - j * up < M
//! ```
//!
//! which is exactly sample `k` of the full convolution of the stuffed signal
//! with the taps. The stuffed zeros are never multiplied and decimation only
//! evaluates the `k` it keeps, so no intermediate sequence is materialized.
//!
//! # Examples
//!
//! ```rust
//! use dsp_buffer::{BufferFiltering, ConvMode, RealBuffer};
//!
//! let mut signal = RealBuffer::from_slice(&[1.0f64, 0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0]);
//! let taps = RealBuffer::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! signal.conv(&taps, ConvMode::Full).unwrap();
//! assert_eq!(signal.len(), 13);
//! assert_eq!(signal[4], -5.0);
//! ```

use super::traits::BufferFiltering;
use super::types::ConvMode;
use crate::{BufferError, BufferResult, RealBuffer, RealFloat};
use ndarray::{Array1, ArrayView1};

/// Length of the full convolution of `signal_len` samples with `taps_len` taps.
///
/// Zero if either input is empty; `None` if the length overflows `usize`.
pub const fn conv_output_len(signal_len: usize, taps_len: usize) -> Option<usize> {
    if signal_len == 0 || taps_len == 0 {
        return Some(0);
    }
    signal_len.checked_add(taps_len - 1)
}

/// Length of [`decimate`]'s output, `ceil((N + M - 1) / rate)`.
///
/// Zero if `rate` is zero.
pub const fn decimate_output_len(signal_len: usize, taps_len: usize, rate: usize) -> Option<usize> {
    if rate == 0 {
        return Some(0);
    }
    match conv_output_len(signal_len, taps_len) {
        Some(len) => Some(len.div_ceil(rate)),
        None => None,
    }
}

/// Length of [`interp`]'s output, `N * rate + M - rate`.
///
/// Zero if any argument is zero; `None` if the length overflows `usize`.
pub const fn interp_output_len(signal_len: usize, taps_len: usize, rate: usize) -> Option<usize> {
    if signal_len == 0 || taps_len == 0 || rate == 0 {
        return Some(0);
    }
    // (N - 1) * rate + M == N * rate + M - rate without underflow when M < rate
    match (signal_len - 1).checked_mul(rate) {
        Some(stuffed) => stuffed.checked_add(taps_len),
        None => None,
    }
}

/// Length of [`resample`]'s output, the interpolated length divided by
/// `decimate_rate` rounded up.
///
/// Zero if any argument is zero; `None` if the interpolated length overflows
/// `usize`.
pub const fn resample_output_len(
    signal_len: usize,
    taps_len: usize,
    interp_rate: usize,
    decimate_rate: usize,
) -> Option<usize> {
    if decimate_rate == 0 {
        return Some(0);
    }
    match interp_output_len(signal_len, taps_len, interp_rate) {
        Some(len) => Some(len.div_ceil(decimate_rate)),
        None => None,
    }
}

fn output_len_or_overflow(operation: &'static str, out_len: Option<usize>) -> BufferResult<usize> {
    out_len.ok_or_else(|| {
        BufferError::invalid_parameter("rate", format!("{operation} output length overflows usize"))
    })
}

fn validate_taps<T: RealFloat>(operation: &'static str, taps: &RealBuffer<T>) -> BufferResult<()> {
    if taps.is_empty() {
        return Err(BufferError::EmptyTaps { operation });
    }
    Ok(())
}

fn validate_rate(operation: &'static str, parameter: &'static str, rate: usize) -> BufferResult<()> {
    if rate == 0 {
        return Err(BufferError::InvalidRate {
            operation,
            parameter,
            value: rate,
        });
    }
    Ok(())
}

/// Evaluates output sample `k` of `x` zero-stuffed by `up` and convolved with `h`.
///
/// Callers guarantee `x` and `h` are non-empty and `up >= 1`.
#[inline]
fn polyphase_sample<T: RealFloat>(x: ArrayView1<'_, T>, h: ArrayView1<'_, T>, up: usize, k: usize) -> T {
    let taps_len = h.len();
    // Smallest j with k - j * up < M
    let first = if k >= taps_len {
        (k + 1 - taps_len).div_ceil(up)
    } else {
        0
    };
    let last = (k / up).min(x.len() - 1);

    let mut acc = T::zero();
    let mut j = first;
    while j <= last {
        acc = acc + x[j] * h[k - j * up];
        j += 1;
    }
    acc
}

/// Evaluates the kernel at `out_len` output positions `offset, offset + step, ...`.
fn polyphase<T: RealFloat>(
    x: ArrayView1<'_, T>,
    h: ArrayView1<'_, T>,
    up: usize,
    offset: usize,
    step: usize,
    out_len: usize,
) -> Array1<T> {
    if x.is_empty() {
        return Array1::zeros(0);
    }
    Array1::from_shape_fn(out_len, |i| polyphase_sample(x, h, up, offset + i * step))
}

impl<T: RealFloat> BufferFiltering<T> for RealBuffer<T> {
    fn conv(&mut self, taps: &Self, mode: ConvMode) -> BufferResult<()> {
        validate_taps("conv", taps)?;
        tracing::debug!(
            signal_len = self.len(),
            taps_len = taps.len(),
            ?mode,
            "convolving"
        );

        let (offset, out_len) = match mode {
            ConvMode::Full => (
                0,
                output_len_or_overflow("conv", conv_output_len(self.len(), taps.len()))?,
            ),
            ConvMode::Trimmed => ((taps.len() - 1) / 2, self.len()),
        };
        tracing::trace!(offset, out_len, "conv output window");

        let filtered = polyphase(self.as_view(), taps.as_view(), 1, offset, 1, out_len);
        self.replace(filtered);
        Ok(())
    }

    fn decimate(&mut self, rate: usize, taps: &Self) -> BufferResult<()> {
        validate_taps("decimate", taps)?;
        validate_rate("decimate", "rate", rate)?;
        tracing::debug!(
            signal_len = self.len(),
            taps_len = taps.len(),
            rate,
            "decimating"
        );

        let out_len = output_len_or_overflow(
            "decimate",
            decimate_output_len(self.len(), taps.len(), rate),
        )?;
        tracing::trace!(out_len, "decimate output length");

        let filtered = polyphase(self.as_view(), taps.as_view(), 1, 0, rate, out_len);
        self.replace(filtered);
        Ok(())
    }

    fn interp(&mut self, rate: usize, taps: &Self) -> BufferResult<()> {
        validate_taps("interp", taps)?;
        validate_rate("interp", "rate", rate)?;
        tracing::debug!(
            signal_len = self.len(),
            taps_len = taps.len(),
            rate,
            "interpolating"
        );

        let out_len = output_len_or_overflow(
            "interp",
            interp_output_len(self.len(), taps.len(), rate),
        )?;
        tracing::trace!(out_len, "interp output length");

        let filtered = polyphase(self.as_view(), taps.as_view(), rate, 0, 1, out_len);
        self.replace(filtered);
        Ok(())
    }

    fn resample(&mut self, interp_rate: usize, decimate_rate: usize, taps: &Self) -> BufferResult<()> {
        validate_taps("resample", taps)?;
        validate_rate("resample", "interp_rate", interp_rate)?;
        validate_rate("resample", "decimate_rate", decimate_rate)?;
        tracing::debug!(
            signal_len = self.len(),
            taps_len = taps.len(),
            interp_rate,
            decimate_rate,
            "resampling"
        );

        let out_len = output_len_or_overflow(
            "resample",
            resample_output_len(self.len(), taps.len(), interp_rate, decimate_rate),
        )?;
        tracing::trace!(out_len, "resample output length");

        let filtered = polyphase(
            self.as_view(),
            taps.as_view(),
            interp_rate,
            0,
            decimate_rate,
            out_len,
        );
        self.replace(filtered);
        Ok(())
    }
}

/// Returns the convolution of `signal` with `taps`. See [`BufferFiltering::conv`].
///
/// # Errors
/// Returns an error if `taps` is empty.
pub fn conv<T: RealFloat>(
    signal: &RealBuffer<T>,
    taps: &RealBuffer<T>,
    mode: ConvMode,
) -> BufferResult<RealBuffer<T>> {
    let mut out = signal.clone();
    out.conv(taps, mode)?;
    Ok(out)
}

/// Returns `signal` filtered by `taps` and decimated by `rate`.
///
/// # Errors
/// Returns an error if `taps` is empty or `rate` is zero.
pub fn decimate<T: RealFloat>(
    signal: &RealBuffer<T>,
    rate: usize,
    taps: &RealBuffer<T>,
) -> BufferResult<RealBuffer<T>> {
    let mut out = signal.clone();
    out.decimate(rate, taps)?;
    Ok(out)
}

/// Returns `signal` interpolated by `rate` through `taps`.
///
/// # Errors
/// Returns an error if `taps` is empty or `rate` is zero.
pub fn interp<T: RealFloat>(
    signal: &RealBuffer<T>,
    rate: usize,
    taps: &RealBuffer<T>,
) -> BufferResult<RealBuffer<T>> {
    let mut out = signal.clone();
    out.interp(rate, taps)?;
    Ok(out)
}

/// Returns `signal` resampled by `interp_rate / decimate_rate` through `taps`.
///
/// # Errors
/// Returns an error if `taps` is empty or either rate is zero.
pub fn resample<T: RealFloat>(
    signal: &RealBuffer<T>,
    interp_rate: usize,
    decimate_rate: usize,
    taps: &RealBuffer<T>,
) -> BufferResult<RealBuffer<T>> {
    let mut out = signal.clone();
    out.resample(interp_rate, decimate_rate, taps)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> RealBuffer<f64> {
        RealBuffer::from_slice(&[1.0, 0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0])
    }

    fn taps() -> RealBuffer<f64> {
        RealBuffer::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0])
    }

    /// Direct full convolution used as the reference for the kernel.
    fn full_conv(x: &[f64], h: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; x.len() + h.len() - 1];
        for (j, &xj) in x.iter().enumerate() {
            for (i, &hi) in h.iter().enumerate() {
                out[i + j] += xj * hi;
            }
        }
        out
    }

    #[test]
    fn test_conv_full() {
        let mut signal = ramp();
        signal.conv(&taps(), ConvMode::Full).unwrap();
        assert_eq!(
            signal.to_vec(),
            vec![
                1.0, 2.0, 2.0, 0.0, -5.0, -20.0, -35.0, -50.0, -65.0, -72.0, -70.0, -58.0, -35.0
            ]
        );
    }

    #[test]
    fn test_conv_trimmed_keeps_central_samples() {
        let trimmed = conv(&ramp(), &taps(), ConvMode::Trimmed).unwrap();
        assert_eq!(
            trimmed.to_vec(),
            vec![2.0, 0.0, -5.0, -20.0, -35.0, -50.0, -65.0, -72.0, -70.0]
        );

        let even_taps = RealBuffer::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let trimmed = conv(&ramp(), &even_taps, ConvMode::Trimmed).unwrap();
        assert_eq!(
            trimmed.to_vec(),
            vec![2.0, 2.0, 0.0, -10.0, -20.0, -30.0, -40.0, -50.0, -52.0]
        );
    }

    #[test]
    fn test_conv_leaves_taps_untouched() {
        let taps = taps();
        let mut signal = ramp();
        signal.conv(&taps, ConvMode::Full).unwrap();
        assert_eq!(taps.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_decimate() {
        let mut signal = ramp();
        signal.decimate(3, &taps()).unwrap();
        assert_eq!(signal.to_vec(), vec![1.0, 0.0, -35.0, -72.0, -35.0]);
        assert_eq!(Some(signal.len()), decimate_output_len(9, 5, 3));
    }

    #[test]
    fn test_decimate_matches_subsampled_conv() {
        let full = full_conv(&ramp().to_vec(), &taps().to_vec());
        for rate in 1..=14 {
            let decimated = decimate(&ramp(), rate, &taps()).unwrap();
            let expected: Vec<f64> = full.iter().copied().step_by(rate).collect();
            assert_eq!(decimated.to_vec(), expected, "rate {rate}");
        }
    }

    #[test]
    fn test_interp() {
        let interpolated = interp(&ramp(), 3, &taps()).unwrap();
        assert_eq!(
            interpolated.to_vec(),
            vec![
                1.0, 2.0, 3.0, 4.0, 5.0, 0.0, -1.0, -2.0, -3.0, -6.0, -9.0, -6.0, -11.0, -16.0,
                -9.0, -16.0, -23.0, -12.0, -21.0, -30.0, -15.0, -26.0, -37.0, -18.0, -31.0,
                -44.0, -21.0, -28.0, -35.0
            ]
        );
        assert_eq!(interpolated.len(), 9 * 3 + 5 - 3);
    }

    #[test]
    #[cfg(feature = "editing")]
    fn test_interp_matches_upsample_then_conv() {
        use crate::operations::editing;

        let signal = RealBuffer::from_slice(&[1.0, 2.0]);
        for rate in 1..=7 {
            let stuffed = editing::upsample(&signal, rate, 0).unwrap();
            let full = full_conv(&stuffed.to_vec(), &taps().to_vec());
            let out = interp(&signal, rate, &taps()).unwrap();
            assert_eq!(Some(out.len()), interp_output_len(2, 5, rate));
            assert_eq!(out.to_vec(), full[..out.len()].to_vec(), "rate {rate}");
        }
    }

    #[test]
    fn test_resample() {
        let mut signal = ramp();
        signal.resample(3, 2, &taps()).unwrap();
        assert_eq!(
            signal.to_vec(),
            vec![
                1.0, 3.0, 5.0, -1.0, -3.0, -9.0, -11.0, -9.0, -23.0, -21.0, -15.0, -37.0, -31.0,
                -21.0, -35.0
            ]
        );
        assert_eq!(Some(signal.len()), resample_output_len(9, 5, 3, 2));
    }

    #[test]
    fn test_resample_unit_rates_is_conv() {
        let resampled = resample(&ramp(), 1, 1, &taps()).unwrap();
        let convolved = conv(&ramp(), &taps(), ConvMode::Full).unwrap();
        assert_eq!(resampled, convolved);
    }

    #[test]
    fn test_single_tap_identity() {
        let unit = RealBuffer::from_slice(&[1.0]);
        assert_eq!(conv(&ramp(), &unit, ConvMode::Full).unwrap(), ramp());
        assert_eq!(conv(&ramp(), &unit, ConvMode::Trimmed).unwrap(), ramp());
    }

    #[test]
    fn test_empty_taps_rejected() {
        let empty = RealBuffer::<f64>::zeros(0);
        let mut signal = ramp();
        assert_eq!(
            signal.conv(&empty, ConvMode::Full).unwrap_err(),
            BufferError::EmptyTaps { operation: "conv" }
        );
        assert!(decimate(&ramp(), 2, &empty).is_err());
        assert!(interp(&ramp(), 2, &empty).is_err());
        assert!(resample(&ramp(), 2, 3, &empty).is_err());
        assert_eq!(signal, ramp());
    }

    #[test]
    fn test_zero_rate_rejected() {
        assert_eq!(
            decimate(&ramp(), 0, &taps()).unwrap_err(),
            BufferError::InvalidRate {
                operation: "decimate",
                parameter: "rate",
                value: 0
            }
        );
        assert!(matches!(
            interp(&ramp(), 0, &taps()),
            Err(BufferError::InvalidRate { .. })
        ));
        assert!(matches!(
            resample(&ramp(), 3, 0, &taps()),
            Err(BufferError::InvalidRate {
                parameter: "decimate_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_signal_stays_empty() {
        let empty = RealBuffer::<f64>::zeros(0);
        assert!(conv(&empty, &taps(), ConvMode::Full).unwrap().is_empty());
        assert!(conv(&empty, &taps(), ConvMode::Trimmed).unwrap().is_empty());
        assert!(decimate(&empty, 2, &taps()).unwrap().is_empty());
        assert!(interp(&empty, 2, &taps()).unwrap().is_empty());
        assert!(resample(&empty, 3, 2, &taps()).unwrap().is_empty());
    }

    #[test]
    fn test_output_len_helpers() {
        assert_eq!(conv_output_len(9, 5), Some(13));
        assert_eq!(conv_output_len(0, 5), Some(0));
        assert_eq!(decimate_output_len(9, 5, 3), Some(5));
        assert_eq!(decimate_output_len(9, 5, 0), Some(0));
        assert_eq!(interp_output_len(9, 5, 3), Some(29));
        assert_eq!(interp_output_len(2, 2, 4), Some(6));
        assert_eq!(resample_output_len(9, 5, 3, 2), Some(15));
    }

    #[test]
    fn test_output_len_overflow() {
        assert_eq!(conv_output_len(usize::MAX, 2), None);
        assert_eq!(interp_output_len(9, 5, usize::MAX), None);
        assert_eq!(interp_output_len(2, usize::MAX, usize::MAX / 2 + 1), None);
        assert_eq!(resample_output_len(9, 5, usize::MAX, 2), None);
        // A single sample never multiplies the rate
        assert_eq!(interp_output_len(1, 5, usize::MAX), Some(5));
    }

    #[test]
    fn test_overflowing_rate_is_an_error() {
        let mut signal = ramp();
        assert!(matches!(
            signal.interp(usize::MAX, &taps()),
            Err(BufferError::InvalidParameter(_))
        ));
        assert!(matches!(
            resample(&ramp(), usize::MAX / 4, 3, &taps()),
            Err(BufferError::InvalidParameter(_))
        ));
        assert_eq!(signal, ramp());
    }
}
