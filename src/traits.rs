//! Sample type trait and numeric cast helpers.

use num_traits::{Float, FloatConst, NumCast, float::TotalOrder};
use std::fmt::{Debug, Display};

use crate::{BufferError, BufferResult};

/// Marker trait for the real floating-point sample types a buffer can hold.
///
/// Implemented for `f32` and `f64`. All buffer arithmetic, statistics and
/// filtering is written once against this trait, so the same code runs at
/// either precision.
pub trait RealFloat:
    Float + FloatConst + TotalOrder + NumCast + Debug + Display + Default + Send + Sync + 'static
{
}

impl RealFloat for f32 {}
impl RealFloat for f64 {}

/// Casts a numeric value into the target floating-point type `F`.
///
/// Used for sample counts and other values that are always representable
/// in `f32`/`f64`, so the cast is infallible in practice.
///
/// # Examples
/// ```
/// use dsp_buffer::to_precision;
///
/// let n: f64 = to_precision(8usize);
/// assert_eq!(n, 8.0);
/// ```
///
/// # Panics
/// Panics if the numeric conversion fails.
#[inline(always)]
pub fn to_precision<F, T>(value: T) -> F
where
    F: RealFloat,
    T: NumCast,
{
    NumCast::from(value).expect("to_precision: valid numeric conversion")
}

/// Fallible variant of [`to_precision`] used when the source value comes from
/// the caller (e.g. integer filter taps).
pub fn try_to_precision<F, T>(value: T) -> BufferResult<F>
where
    F: RealFloat,
    T: NumCast + Debug + Copy,
{
    <F as NumCast>::from(value).ok_or_else(|| BufferError::ConversionError {
        value: format!("{value:?}"),
        target: std::any::type_name::<F>(),
    })
}
