//! Buffer operations and transformations.
//!
//! This module provides the operation layers of the crate as focused
//! traits implemented for [`RealBuffer`](crate::RealBuffer). Each layer sits
//! behind a Cargo feature of the same name.
//!
//! ## Module Organization
//!
//! - [`traits`] - Core trait definitions
//! - [`types`] - Supporting types and enums
//! - [`statistics`] - Statistical reductions (mean, var, median, extrema)
//! - [`processing`] - Elementwise math (abs, exp, log, pow, saturate)
//! - [`editing`] - Structural transforms (reverse, rotate, resize, upsample, diff)
//! - [`filtering`] - FIR convolution, decimation, interpolation and resampling
//!
//! Trait methods mutate the buffer in place. Each implementation module also
//! exports free functions of the same names that leave their input untouched
//! and return a new buffer.
//!
//! ## Quick Start
//!
//! ```rust
//! use dsp_buffer::{RealBuffer, operations::*};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut signal = RealBuffer::from_slice(&[1.0f64, 3.0, 5.0, 7.12, 2.0, 4.0, 6.0, 8.0]);
//!
//! // Statistical analysis
//! let centre = signal.median()?;
//! let spread = signal.std_dev()?;
//!
//! // In-place transforms chain
//! signal.abs().saturate(6.0);
//!
//! // Filtering replaces the contents
//! let taps = RealBuffer::from_slice(&[0.25, 0.5, 0.25]);
//! signal.decimate(2, &taps)?;
//! assert_eq!(signal.len(), 5);
//! # let _ = (centre, spread);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod traits;
pub mod types;

#[cfg(feature = "editing")]
pub mod editing;
#[cfg(feature = "filtering")]
pub mod filtering;
#[cfg(feature = "processing")]
pub mod processing;
#[cfg(feature = "statistics")]
pub mod statistics;

// Re-export main traits for convenience
pub use traits::{BufferEditing, BufferFiltering, BufferProcessing, BufferStatistics};

// Re-export supporting types
pub use types::{ConvMode, Extremum};
