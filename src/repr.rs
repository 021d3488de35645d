//! Core sample buffer representation.
//!
//! [`RealBuffer<T>`] owns an ordered, resizable run of real-valued samples
//! stored in a contiguous `ndarray::Array1`. It is the unit every other
//! layer of the crate operates on: statistics read it, processing and
//! editing transforms mutate it, and the filtering engine replaces its
//! contents with filtered output.
//!
//! # Examples
//!
//! ```rust
//! use dsp_buffer::RealBuffer;
//!
//! let mut buf = RealBuffer::from_slice(&[1.0f64, 3.0, 5.0, 7.12]);
//! buf += 5.0;
//! assert_eq!(buf.to_vec(), vec![6.0, 8.0, 10.0, 7.12 + 5.0]);
//!
//! let doubled = &buf + &buf;
//! assert_eq!(doubled[0], 12.0);
//! ```
//!
//! # Layout invariant
//!
//! The backing array is always in standard (contiguous, unit-stride) layout.
//! Every constructor and every mutating operation in the crate preserves
//! this, so sample `i` is always the `i`-th element in memory.

use ndarray::{Array1, ArrayView1, ArrayViewMut1, Axis, aview0};
use num_traits::NumCast;
use std::fmt::{Debug, Display};
use std::ops::{Index, IndexMut, Neg};

use crate::traits::try_to_precision;
use crate::{BufferError, BufferResult, RealFloat};

/// An owned, resizable sequence of real-valued samples.
///
/// Cloning is a deep copy; two buffers never alias. Equality holds when both
/// buffers have the same length and every pair of samples compares equal.
///
/// # Examples
/// ```rust
/// use dsp_buffer::RealBuffer;
///
/// let zeros = RealBuffer::<f32>::zeros(4);
/// assert_eq!(zeros.len(), 4);
///
/// let taps = RealBuffer::<f64>::from_cast(&[1i32, 2, 3]).unwrap();
/// assert_eq!(taps.to_vec(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealBuffer<T: RealFloat> {
    pub(crate) data: Array1<T>,
}

impl<T: RealFloat> RealBuffer<T> {
    /// Creates a buffer of `len` zero-valued samples.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: Array1::zeros(len),
        }
    }

    /// Creates a buffer by copying the given samples, preserving order.
    pub fn from_slice(samples: &[T]) -> Self {
        Self {
            data: Array1::from(samples.to_vec()),
        }
    }

    /// Creates a buffer that takes ownership of `samples`.
    pub fn from_vec(samples: Vec<T>) -> Self {
        Self {
            data: Array1::from(samples),
        }
    }

    /// Creates a buffer by casting every value of another numeric type.
    ///
    /// Useful for filter taps written as integers.
    ///
    /// # Errors
    /// Returns [`BufferError::ConversionError`] if a value cannot be
    /// represented as `T`.
    pub fn from_cast<S>(values: &[S]) -> BufferResult<Self>
    where
        S: NumCast + Debug + Copy,
    {
        let samples = values
            .iter()
            .map(|&v| try_to_precision::<T, S>(v))
            .collect::<BufferResult<Vec<T>>>()?;
        Ok(Self::from_vec(samples))
    }

    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the sample at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns a mutable reference to the sample at `index`, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Iterates over the samples in order.
    pub fn iter(&self) -> ndarray::iter::Iter<'_, T, ndarray::Ix1> {
        self.data.iter()
    }

    /// Iterates mutably over the samples in order.
    pub fn iter_mut(&mut self) -> ndarray::iter::IterMut<'_, T, ndarray::Ix1> {
        self.data.iter_mut()
    }

    /// Borrowed view of the samples.
    pub fn as_view(&self) -> ArrayView1<'_, T> {
        self.data.view()
    }

    /// Mutable borrowed view of the samples.
    pub fn as_view_mut(&mut self) -> ArrayViewMut1<'_, T> {
        self.data.view_mut()
    }

    /// The backing array.
    pub const fn as_array(&self) -> &Array1<T> {
        &self.data
    }

    /// Copies the samples into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Consumes the buffer and returns the backing array.
    pub fn into_inner(self) -> Array1<T> {
        self.data
    }

    /// Appends one sample to the end of the buffer.
    ///
    /// Growth is amortized by ndarray, so repeated pushes do not copy the
    /// whole buffer each time.
    ///
    /// # Errors
    /// Returns [`BufferError::Layout`] if ndarray cannot grow the array.
    pub fn push(&mut self, value: T) -> BufferResult<()> {
        self.data
            .push(Axis(0), aview0(&value))
            .map_err(|err| BufferError::Layout(err.to_string()))
    }

    /// Applies `func` to every sample in place.
    pub fn apply<F>(&mut self, func: F)
    where
        F: FnMut(T) -> T,
    {
        self.data.mapv_inplace(func);
    }

    /// Replaces the contents with `samples`.
    pub(crate) fn replace(&mut self, samples: Array1<T>) {
        self.data = samples;
    }

    /// Swaps two samples. Both indices must be in range.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    fn zip_in_place<F>(&mut self, rhs: &Self, operation: &'static str, mut func: F) -> BufferResult<()>
    where
        F: FnMut(T, T) -> T,
    {
        if self.len() != rhs.len() {
            return Err(BufferError::SizeMismatch {
                operation,
                left: self.len(),
                right: rhs.len(),
            });
        }
        // Lengths are equal, so zip_mut_with never broadcasts here.
        self.data.zip_mut_with(&rhs.data, |a, &b| *a = func(*a, b));
        Ok(())
    }
}

impl<T: RealFloat> Index<usize> for RealBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: RealFloat> IndexMut<usize> for RealBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: RealFloat> From<Vec<T>> for RealBuffer<T> {
    fn from(samples: Vec<T>) -> Self {
        Self::from_vec(samples)
    }
}

impl<T: RealFloat> From<&[T]> for RealBuffer<T> {
    fn from(samples: &[T]) -> Self {
        Self::from_slice(samples)
    }
}

impl<T: RealFloat> From<Array1<T>> for RealBuffer<T> {
    fn from(data: Array1<T>) -> Self {
        // as_standard_layout is a no-op for arrays that are already contiguous
        Self {
            data: data.as_standard_layout().into_owned(),
        }
    }
}

impl<T: RealFloat> FromIterator<T> for RealBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: Array1::from_iter(iter),
        }
    }
}

impl<'a, T: RealFloat> IntoIterator for &'a RealBuffer<T> {
    type Item = &'a T;
    type IntoIter = ndarray::iter::Iter<'a, T, ndarray::Ix1>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

macro_rules! impl_buffer_ops {
    ($(
        $trait:ident, $method:ident,
        $assign_trait:ident, $assign_method:ident,
        $checked:ident, $try_assign:ident,
        $op:tt,
        $name:literal
    );+ $(;)?) => {
        $(
            impl<T: RealFloat> RealBuffer<T> {
                #[doc = concat!("Elementwise `", stringify!($op), "` into a new buffer.")]
                ///
                /// # Errors
                /// Returns [`BufferError::SizeMismatch`] if the lengths differ.
                pub fn $checked(&self, rhs: &Self) -> BufferResult<Self> {
                    let mut out = self.clone();
                    out.$try_assign(rhs)?;
                    Ok(out)
                }

                #[doc = concat!("Elementwise `", stringify!($op), "` in place on `self`.")]
                ///
                /// # Errors
                /// Returns [`BufferError::SizeMismatch`] if the lengths differ;
                /// `self` is left untouched in that case.
                pub fn $try_assign(&mut self, rhs: &Self) -> BufferResult<()> {
                    self.zip_in_place(rhs, $name, |a, b| a $op b)
                }
            }

            // =========================
            // Assignment ops: buffer ∘= buffer (in place)
            // =========================
            impl<T: RealFloat> std::ops::$assign_trait<&RealBuffer<T>> for RealBuffer<T> {
                fn $assign_method(&mut self, rhs: &RealBuffer<T>) {
                    if let Err(err) = self.$try_assign(rhs) {
                        panic!("{err}");
                    }
                }
            }

            impl<T: RealFloat> std::ops::$assign_trait<RealBuffer<T>> for RealBuffer<T> {
                fn $assign_method(&mut self, rhs: RealBuffer<T>) {
                    std::ops::$assign_trait::$assign_method(self, &rhs);
                }
            }

            // =========================
            // Binary ops: buffer ∘ buffer -> new buffer
            // =========================
            impl<T: RealFloat> std::ops::$trait<&RealBuffer<T>> for &RealBuffer<T> {
                type Output = RealBuffer<T>;

                fn $method(self, rhs: &RealBuffer<T>) -> Self::Output {
                    let mut out = self.clone();
                    std::ops::$assign_trait::$assign_method(&mut out, rhs);
                    out
                }
            }

            impl<T: RealFloat> std::ops::$trait<&RealBuffer<T>> for RealBuffer<T> {
                type Output = RealBuffer<T>;

                fn $method(mut self, rhs: &RealBuffer<T>) -> Self::Output {
                    std::ops::$assign_trait::$assign_method(&mut self, rhs);
                    self
                }
            }

            impl<T: RealFloat> std::ops::$trait<RealBuffer<T>> for RealBuffer<T> {
                type Output = RealBuffer<T>;

                fn $method(mut self, rhs: RealBuffer<T>) -> Self::Output {
                    std::ops::$assign_trait::$assign_method(&mut self, &rhs);
                    self
                }
            }

            impl_buffer_scalar_ops!($trait, $method, $assign_trait, $assign_method, $op, f32);
            impl_buffer_scalar_ops!($trait, $method, $assign_trait, $assign_method, $op, f64);
        )+
    };
}

// Scalar operands are implemented per concrete sample type.
macro_rules! impl_buffer_scalar_ops {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt, $scalar:ty) => {
        impl std::ops::$assign_trait<$scalar> for RealBuffer<$scalar> {
            fn $assign_method(&mut self, rhs: $scalar) {
                self.data.mapv_inplace(|x| x $op rhs);
            }
        }

        impl std::ops::$trait<$scalar> for RealBuffer<$scalar> {
            type Output = RealBuffer<$scalar>;

            fn $method(mut self, rhs: $scalar) -> Self::Output {
                self.data.mapv_inplace(|x| x $op rhs);
                self
            }
        }

        impl std::ops::$trait<$scalar> for &RealBuffer<$scalar> {
            type Output = RealBuffer<$scalar>;

            fn $method(self, rhs: $scalar) -> Self::Output {
                RealBuffer {
                    data: self.data.mapv(|x| x $op rhs),
                }
            }
        }
    };
}

impl_buffer_ops!(
    Add, add, AddAssign, add_assign, checked_add, try_add_assign, +, "add";
    Sub, sub, SubAssign, sub_assign, checked_sub, try_sub_assign, -, "subtract";
    Mul, mul, MulAssign, mul_assign, checked_mul, try_mul_assign, *, "multiply";
    Div, div, DivAssign, div_assign, checked_div, try_div_assign, /, "divide";
);

// Negation
impl<T: RealFloat> Neg for RealBuffer<T> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.data.mapv_inplace(|x| -x);
        self
    }
}

impl<T: RealFloat> Neg for &RealBuffer<T> {
    type Output = RealBuffer<T>;

    fn neg(self) -> Self::Output {
        RealBuffer {
            data: self.data.mapv(|x| -x),
        }
    }
}

impl<T: RealFloat> Display for RealBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let type_name = std::any::type_name::<T>();
        let len = self.len();

        writeln!(f, "RealBuffer<{}>: {} samples", type_name, len)?;

        // Alternate (#) shows head and tail; otherwise a short preview
        let preview = if f.alternate() { 5.min(len) } else { 3.min(len) };
        write!(f, "[")?;
        for (i, val) in self.data.iter().take(preview).enumerate() {
            write!(f, "{:.4}", val)?;
            if i + 1 < preview {
                write!(f, ", ")?;
            }
        }
        if len > preview {
            if f.alternate() {
                let tail = preview.min(len - preview);
                write!(f, ", ..., ")?;
                for (i, val) in self.data.iter().skip(len - tail).enumerate() {
                    write!(f, "{:.4}", val)?;
                    if i + 1 < tail {
                        write!(f, ", ")?;
                    }
                }
            } else {
                write!(f, ", ...")?;
            }
        }
        write!(f, "]")
    }
}
