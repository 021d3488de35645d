//! Buffer comparison and similarity utilities.
//!
//! Floating-point results of the statistics and filtering layers rarely
//! match a reference bit for bit. These helpers compare buffers within a
//! tolerance that is absolute near zero and relative for large magnitudes.

use crate::{BufferError, BufferResult, RealBuffer, RealFloat};

/// Returns true if `a` and `b` differ by at most `tolerance`, scaled by the
/// larger magnitude once that exceeds one.
pub fn samples_close<T: RealFloat>(a: T, b: T, tolerance: T) -> bool {
    if a == b {
        return true;
    }
    let scale = T::one().max(a.abs()).max(b.abs());
    (a - b).abs() <= tolerance * scale
}

/// Returns true if both buffers have the same length and every pair of
/// samples satisfies [`samples_close`].
///
/// A length mismatch is simply "not equal", never an error.
pub fn approx_equal<T: RealFloat>(a: &RealBuffer<T>, b: &RealBuffer<T>, tolerance: T) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(&x, &y)| samples_close(x, y, tolerance))
}

/// Largest absolute sample difference between two equal-length buffers.
///
/// # Errors
/// Returns [`BufferError::SizeMismatch`] if the lengths differ.
pub fn max_abs_difference<T: RealFloat>(a: &RealBuffer<T>, b: &RealBuffer<T>) -> BufferResult<T> {
    if a.len() != b.len() {
        return Err(BufferError::SizeMismatch {
            operation: "max_abs_difference",
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a
        .iter()
        .zip(b.iter())
        .fold(T::zero(), |worst, (&x, &y)| worst.max((x - y).abs())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_close_scales_with_magnitude() {
        assert!(samples_close(0.0f64, 1e-9, 1e-8));
        assert!(!samples_close(0.0f64, 1e-7, 1e-8));
        // 1e-9 apart at magnitude 3000 is within a relative 1e-8
        assert!(samples_close(2980.95798704f64, 2980.957987041, 1e-8));
        assert!(samples_close(f64::INFINITY, f64::INFINITY, 1e-8));
    }

    #[test]
    fn test_approx_equal_requires_same_length() {
        let a = RealBuffer::from_slice(&[1.0f64, 2.0]);
        let b = RealBuffer::from_slice(&[1.0f64, 2.0, 3.0]);
        assert!(!approx_equal(&a, &b, 1e-6));
        assert!(approx_equal(&a, &a.clone(), 0.0));
    }

    #[test]
    fn test_max_abs_difference() {
        let a = RealBuffer::from_slice(&[1.0f64, 2.0, 3.0]);
        let b = RealBuffer::from_slice(&[1.5f64, 2.0, 1.0]);
        assert_eq!(max_abs_difference(&a, &b).unwrap(), 2.0);
        assert!(max_abs_difference(&a, &RealBuffer::zeros(2)).is_err());
    }
}
