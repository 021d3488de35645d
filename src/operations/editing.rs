//! Structural editing operations for RealBuffer.
//!
//! This module implements the [`BufferEditing`] trait: reordering
//! (reverse, rotate), resizing (resize, pad), rate changes without filtering
//! (upsample, downsample) and first differences. Each method has a free
//! function counterpart that returns an edited copy.

use super::traits::BufferEditing;
use crate::{BufferError, BufferResult, RealBuffer, RealFloat};
use ndarray::{Array1, s};

/// Validates the factor/phase pair shared by upsample and downsample.
fn validate_factor(operation: &'static str, factor: usize, phase: usize) -> BufferResult<()> {
    if factor == 0 {
        return Err(BufferError::InvalidRate {
            operation,
            parameter: "factor",
            value: factor,
        });
    }
    if phase >= factor {
        return Err(BufferError::invalid_parameter(
            "phase",
            format!("{operation} phase {phase} must be less than factor {factor}"),
        ));
    }
    Ok(())
}

/// Reverses `lo..hi` in place.
fn reverse_range<T: RealFloat>(buffer: &mut RealBuffer<T>, lo: usize, hi: usize) {
    let (mut i, mut j) = (lo, hi);
    while i + 1 < j {
        j -= 1;
        buffer.swap(i, j);
        i += 1;
    }
}

impl<T: RealFloat> BufferEditing<T> for RealBuffer<T> {
    fn reverse(&mut self) -> &mut Self {
        let len = self.len();
        reverse_range(self, 0, len);
        self
    }

    /// Left rotation by `n mod len` using three in-place reversals.
    fn rotate(&mut self, n: isize) -> &mut Self {
        let len = self.len();
        if len == 0 {
            return self;
        }
        // len fits in isize for any allocated buffer
        let shift = n.rem_euclid(len as isize) as usize;
        if shift != 0 {
            reverse_range(self, 0, shift);
            reverse_range(self, shift, len);
            reverse_range(self, 0, len);
        }
        self
    }

    fn resize(&mut self, new_len: usize) -> &mut Self {
        if new_len == self.len() {
            return self;
        }
        let keep = new_len.min(self.len());
        let mut resized = Array1::zeros(new_len);
        resized
            .slice_mut(s![..keep])
            .assign(&self.data.slice(s![..keep]));
        self.replace(resized);
        self
    }

    fn pad(&mut self, n: usize) -> &mut Self {
        let new_len = self.len() + n;
        self.resize(new_len)
    }

    fn upsample(&mut self, factor: usize, phase: usize) -> BufferResult<&mut Self> {
        validate_factor("upsample", factor, phase)?;
        if self.is_empty() {
            return Ok(self);
        }
        let stuffed_len = self.len().checked_mul(factor).ok_or_else(|| {
            BufferError::invalid_parameter(
                "factor",
                format!("upsample of {} samples by {factor} overflows usize", self.len()),
            )
        })?;
        let mut stuffed = Array1::zeros(stuffed_len);
        // Stride `factor` starting at `phase` lands exactly on the original samples' slots
        stuffed
            .slice_mut(s![phase..;factor])
            .assign(&self.data);
        self.replace(stuffed);
        Ok(self)
    }

    fn downsample(&mut self, factor: usize, phase: usize) -> BufferResult<&mut Self> {
        validate_factor("downsample", factor, phase)?;
        let kept: Array1<T> = self.iter().copied().skip(phase).step_by(factor).collect();
        self.replace(kept);
        Ok(self)
    }

    fn diff(&mut self) -> &mut Self {
        let differences: Array1<T> = self
            .data
            .windows(2)
            .into_iter()
            .map(|pair| pair[1] - pair[0])
            .collect();
        self.replace(differences);
        self
    }

    fn running_diff(&mut self, previous: T) -> T {
        let mut carry = previous;
        for x in self.iter_mut() {
            let current = *x;
            *x = current - carry;
            carry = current;
        }
        carry
    }

    fn cumsum(&mut self, previous: T) -> T {
        let mut total = previous;
        for x in self.iter_mut() {
            total = total + *x;
            *x = total;
        }
        total
    }
}

/// Returns a reversed copy.
pub fn reverse<T: RealFloat>(buffer: &RealBuffer<T>) -> RealBuffer<T> {
    let mut out = buffer.clone();
    out.reverse();
    out
}

/// Returns a copy rotated left by `n` (right for negative `n`).
pub fn rotate<T: RealFloat>(buffer: &RealBuffer<T>, n: isize) -> RealBuffer<T> {
    let mut out = buffer.clone();
    out.rotate(n);
    out
}

/// Returns a copy truncated or zero-extended to `new_len`.
pub fn resize<T: RealFloat>(buffer: &RealBuffer<T>, new_len: usize) -> RealBuffer<T> {
    let mut out = buffer.clone();
    out.resize(new_len);
    out
}

/// Returns a copy with `n` trailing zeros.
pub fn pad<T: RealFloat>(buffer: &RealBuffer<T>, n: usize) -> RealBuffer<T> {
    let mut out = buffer.clone();
    out.pad(n);
    out
}

/// Returns a zero-stuffed copy. See [`BufferEditing::upsample`].
pub fn upsample<T: RealFloat>(
    buffer: &RealBuffer<T>,
    factor: usize,
    phase: usize,
) -> BufferResult<RealBuffer<T>> {
    let mut out = buffer.clone();
    out.upsample(factor, phase)?;
    Ok(out)
}

/// Returns every `factor`-th sample starting at `phase`. See [`BufferEditing::downsample`].
pub fn downsample<T: RealFloat>(
    buffer: &RealBuffer<T>,
    factor: usize,
    phase: usize,
) -> BufferResult<RealBuffer<T>> {
    let mut out = buffer.clone();
    out.downsample(factor, phase)?;
    Ok(out)
}

/// Returns the first difference (one sample shorter).
pub fn diff<T: RealFloat>(buffer: &RealBuffer<T>) -> RealBuffer<T> {
    let mut out = buffer.clone();
    out.diff();
    out
}

/// Returns the seeded first difference and the carry for the next segment.
pub fn running_diff<T: RealFloat>(buffer: &RealBuffer<T>, previous: T) -> (RealBuffer<T>, T) {
    let mut out = buffer.clone();
    let carry = out.running_diff(previous);
    (out, carry)
}

/// Returns the seeded running sum and the final total.
pub fn cumsum<T: RealFloat>(buffer: &RealBuffer<T>, previous: T) -> (RealBuffer<T>, T) {
    let mut out = buffer.clone();
    let total = out.cumsum(previous);
    (out, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 8] = [2.0, 4.0, 6.0, 8.37, 3.0, 5.0, 7.0, 9.0];

    #[test]
    fn test_rotate() {
        let n = DATA.len();
        let mut buf = RealBuffer::from_slice(&DATA);

        buf.rotate(n as isize);
        assert_eq!(buf.to_vec(), DATA.to_vec());

        buf.rotate(3);
        for i in 0..n {
            assert_eq!(buf[i], DATA[(3 + i) % n]);
        }

        buf.rotate(-1);
        for i in 0..n {
            assert_eq!(buf[i], DATA[(2 + i) % n]);
        }
    }

    #[test]
    fn test_rotate_wraps_beyond_length() {
        let buf = RealBuffer::from_slice(&DATA);
        assert_eq!(rotate(&buf, 11), rotate(&buf, 3));
        assert_eq!(rotate(&buf, -9), rotate(&buf, -1));
        assert_eq!(rotate(&buf, -(DATA.len() as isize) * 2), buf);

        let mut empty = RealBuffer::<f64>::zeros(0);
        empty.rotate(5);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_reverse_method_and_function() {
        let mut buf = RealBuffer::from_slice(&DATA);
        buf.reverse();
        for i in 0..DATA.len() {
            assert_eq!(buf[i], DATA[DATA.len() - i - 1]);
        }
        let restored = reverse(&buf);
        assert_eq!(restored.to_vec(), DATA.to_vec());
    }

    #[test]
    fn test_resize_grow_then_shrink() {
        let input = [1.0f64, -10.0, 8.0, 3.0, 6.92, -2.0, -9.0, 1.0];
        let mut buf = RealBuffer::from_slice(&input);

        buf.resize(11);
        assert_eq!(buf.len(), 11);
        assert_eq!(&buf.to_vec()[..8], &input);
        assert!(buf.iter().skip(8).all(|&x| x == 0.0));

        let shrunk = resize(&buf, 4);
        assert_eq!(shrunk.to_vec(), input[..4].to_vec());
    }

    #[test]
    fn test_pad() {
        let input = [1.0f64, -10.0, 8.0, 3.0, 6.92, -2.0, -9.0, 1.0];
        let mut buf = RealBuffer::from_slice(&input);
        buf.pad(5);
        assert_eq!(buf.len(), 13);
        assert_eq!(&buf.to_vec()[..8], &input);
        assert!(buf.iter().skip(8).all(|&x| x == 0.0));
    }

    #[test]
    fn test_upsample_phases() {
        let saved = RealBuffer::from_slice(&[1.0f64, 10001.0, 8.0, -5.0, 6.0, 2.0, 9.0, 1.0]);

        let zero_phase = upsample(&saved, 3, 0).unwrap();
        assert_eq!(
            zero_phase.to_vec(),
            vec![
                1.0, 0.0, 0.0, 10001.0, 0.0, 0.0, 8.0, 0.0, 0.0, -5.0, 0.0, 0.0, 6.0, 0.0, 0.0,
                2.0, 0.0, 0.0, 9.0, 0.0, 0.0, 1.0, 0.0, 0.0
            ]
        );

        let phase_one = upsample(&saved, 3, 1).unwrap();
        assert_eq!(
            phase_one.to_vec(),
            vec![
                0.0, 1.0, 0.0, 0.0, 10001.0, 0.0, 0.0, 8.0, 0.0, 0.0, -5.0, 0.0, 0.0, 6.0, 0.0,
                0.0, 2.0, 0.0, 0.0, 9.0, 0.0, 0.0, 1.0, 0.0
            ]
        );

        let mut buf = saved.clone();
        buf.upsample(4, 3).unwrap();
        assert_eq!(buf.len(), 32);
        assert_eq!(&buf.to_vec()[..8], &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 10001.0]);
        assert_eq!(buf[31], 1.0);
    }

    #[test]
    fn test_upsample_rejects_bad_arguments() {
        let mut buf = RealBuffer::from_slice(&DATA);
        assert!(matches!(
            buf.upsample(0, 0),
            Err(BufferError::InvalidRate { .. })
        ));
        assert!(matches!(
            buf.upsample(3, 3),
            Err(BufferError::InvalidParameter(_))
        ));
        assert_eq!(buf.to_vec(), DATA.to_vec());
    }

    #[test]
    fn test_upsample_overflowing_factor_is_an_error() {
        let mut buf = RealBuffer::from_slice(&DATA);
        let err = buf.upsample(usize::MAX, 0).unwrap_err();
        assert!(matches!(err, BufferError::InvalidParameter(_)));
        assert_eq!(buf.to_vec(), DATA.to_vec());

        // Nothing to multiply for an empty buffer
        let mut empty = RealBuffer::<f64>::zeros(0);
        assert!(empty.upsample(usize::MAX, 0).is_ok());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_downsample_inverts_upsample() {
        let saved = RealBuffer::from_slice(&DATA);
        for phase in 0..3 {
            let stuffed = upsample(&saved, 3, phase).unwrap();
            assert_eq!(downsample(&stuffed, 3, phase).unwrap(), saved);
        }

        let picked = downsample(&saved, 3, 1).unwrap();
        assert_eq!(picked.to_vec(), vec![4.0, 3.0, 9.0]);
    }

    #[test]
    fn test_diff() {
        let mut buf = RealBuffer::from_slice(&[1.0f64, 1.0, 2.0, 4.0, 7.0, 11.0, 16.0, 22.0]);
        buf.diff();
        assert_eq!(buf.to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let mut single = RealBuffer::from_slice(&[3.0f64]);
        single.diff();
        assert!(single.is_empty());
    }

    #[test]
    fn test_running_diff_carries_last_sample() {
        let mut buf = RealBuffer::from_slice(&[1.0f64, 1.0, 2.0, 4.0, 7.0, 11.0, 16.0, 22.0]);
        let previous = buf.running_diff(2.0);
        assert_eq!(previous, 22.0);
        assert_eq!(buf.to_vec(), vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let mut empty = RealBuffer::<f64>::zeros(0);
        assert_eq!(empty.running_diff(7.0), 7.0);
    }

    #[test]
    fn test_running_diff_across_segments_matches_whole() {
        let whole = RealBuffer::from_slice(&[1.0f64, 1.0, 2.0, 4.0, 7.0, 11.0, 16.0, 22.0]);
        let (expected, _) = running_diff(&whole, 0.0);

        let (first, carry) = running_diff(&RealBuffer::from_slice(&whole.to_vec()[..3]), 0.0);
        let (second, _) = running_diff(&RealBuffer::from_slice(&whole.to_vec()[3..]), carry);
        let joined: RealBuffer<f64> = first.iter().chain(second.iter()).copied().collect();
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_cumsum_undoes_running_diff() {
        let original = RealBuffer::from_slice(&[1.0f64, 1.0, 2.0, 4.0, 7.0]);
        let (differences, _) = running_diff(&original, 0.0);
        let (restored, total) = cumsum(&differences, 0.0);
        assert_eq!(restored, original);
        assert_eq!(total, 7.0);
    }
}
