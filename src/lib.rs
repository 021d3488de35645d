// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)] // Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # dsp_buffer
//!
//! A real-valued sample buffer for signal-processing pipelines: elementwise
//! arithmetic, statistical reductions, elementwise and structural transforms,
//! and an FIR filtering engine for convolution, decimation, interpolation and
//! rational resampling.
//!
//! ## Installation
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dsp_buffer = "0.1.0"
//! ```
//!
//! For specific features, enable only what you need:
//!
//! ```toml
//! [dependencies]
//! dsp_buffer = { version = "*", default-features = false, features = ["filtering"] }
//! ```
//!
//! ## Features
//!
//! - `statistics`: mean, variance, median, extrema and search
//! - `processing`: elementwise math (abs, exp, log, pow, saturate)
//! - `editing`: structural transforms (reverse, rotate, resize, upsample, diff)
//! - `filtering`: convolution, decimation, interpolation and resampling
//! - `serde`: `Serialize`/`Deserialize` for buffers and operation types
//!
//! All but `serde` are enabled by default.
//!
//! ## Error Handling
//!
//! Normal numeric edge cases follow IEEE-754: dividing by zero or taking the
//! log of zero produces `inf`/`NaN`, not an error. Contract violations that
//! would yield a meaningless result are reported through [`BufferError`]:
//!
//! ```rust
//! use dsp_buffer::{BufferError, BufferFiltering, RealBuffer};
//!
//! let mut signal = RealBuffer::from_slice(&[1.0f64, 2.0, 3.0]);
//! let taps = RealBuffer::from_slice(&[0.5, 0.5]);
//!
//! match signal.decimate(0, &taps) {
//!     Ok(()) => {}
//!     Err(BufferError::InvalidRate { parameter, value, .. }) => {
//!         eprintln!("bad {parameter}: {value}")
//!     }
//!     Err(other) => eprintln!("Other error: {other}"),
//! }
//! ```
//!
//! Buffer↔buffer operators (`+`, `-=`, ...) panic on a length mismatch since
//! operators cannot return a `Result`; use the `checked_*` and `try_*_assign`
//! forms to get a [`BufferError::SizeMismatch`] instead.
//!
//! ## Quick Start
//!
//! ### Creating Buffers
//!
//! ```rust
//! use dsp_buffer::RealBuffer;
//! use ndarray::array;
//!
//! let zeroed = RealBuffer::<f32>::zeros(16);
//! let copied = RealBuffer::from_slice(&[0.1f64, 0.5, -0.3]);
//! let owned = RealBuffer::from(array![0.1f64, 0.5, -0.3]);
//! assert_eq!(copied, owned);
//! assert_eq!(zeroed.len(), 16);
//! ```
//!
//! ### Arithmetic
//!
//! ```rust
//! use dsp_buffer::{RealBuffer, comparison::approx_equal};
//!
//! let mut buf = RealBuffer::from_slice(&[1.0f64, 3.0, 5.0, 7.12, 2.0, 4.0, 6.0, 8.0]);
//! buf += 5.0;
//! let expected = RealBuffer::from_slice(&[6.0, 8.0, 10.0, 12.12, 7.0, 9.0, 11.0, 13.0]);
//! assert!(approx_equal(&buf, &expected, 1e-12));
//!
//! let other = RealBuffer::from_slice(&[1.0f64; 8]);
//! let sum = &buf + &other;
//! assert_eq!(sum[0], 7.0);
//! assert!(buf.checked_add(&RealBuffer::zeros(3)).is_err());
//! ```
//!
//! ### Statistics
//!
//! ```rust
//! use dsp_buffer::{BufferStatistics, RealBuffer};
//!
//! let buf = RealBuffer::from_slice(&[100.0f64, 300.0, 500.0, 700.12, 200.0, 400.0, 600.0, 800.0]);
//! let mean = buf.mean().unwrap();
//! let peak = buf.max_with_index().unwrap();
//! assert!((mean - 450.015).abs() < 1e-9);
//! assert_eq!(peak.index, 7);
//! ```
//!
//! ### Filtering and Resampling
//!
//! ```rust
//! use dsp_buffer::{BufferFiltering, ConvMode, RealBuffer, operations::filtering};
//!
//! let signal = RealBuffer::from_slice(&[1.0f64, 0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0]);
//! let taps = RealBuffer::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! // Pure form returns a new buffer
//! let full = filtering::conv(&signal, &taps, ConvMode::Full).unwrap();
//! assert_eq!(full.len(), 13);
//!
//! // Method form works in place
//! let mut rate_changed = signal.clone();
//! rate_changed.resample(3, 2, &taps).unwrap();
//! assert_eq!(Some(rate_changed.len()), filtering::resample_output_len(9, 5, 3, 2));
//! ```

mod error;
pub mod operations;
mod repr;
pub mod traits;
pub mod utils;

pub use crate::error::{BufferError, BufferResult};
pub use crate::operations::{ConvMode, Extremum};
pub use crate::repr::RealBuffer;
pub use crate::traits::{RealFloat, to_precision, try_to_precision};
pub use crate::utils::comparison;

#[cfg(feature = "statistics")]
pub use crate::operations::BufferStatistics;

#[cfg(feature = "processing")]
pub use crate::operations::BufferProcessing;

#[cfg(feature = "editing")]
pub use crate::operations::BufferEditing;

#[cfg(feature = "filtering")]
pub use crate::operations::BufferFiltering;
