//! Elementwise math operations for RealBuffer.
//!
//! Every operation maps a scalar function over the samples in place. The
//! free functions return a transformed copy and leave their input alone.

use super::traits::BufferProcessing;
use crate::{RealBuffer, RealFloat};

impl<T: RealFloat> BufferProcessing<T> for RealBuffer<T> {
    fn abs(&mut self) -> &mut Self {
        self.apply(|x| x.abs());
        self
    }

    fn exp(&mut self) -> &mut Self {
        self.apply(|x| x.exp());
        self
    }

    fn log(&mut self) -> &mut Self {
        self.apply(|x| x.ln());
        self
    }

    fn ln(&mut self) -> &mut Self {
        self.log()
    }

    fn log10(&mut self) -> &mut Self {
        self.apply(|x| x.log10());
        self
    }

    fn pow(&mut self, exponent: T) -> &mut Self {
        self.apply(|x| x.powf(exponent));
        self
    }

    fn saturate(&mut self, limit: T) -> &mut Self {
        let limit = limit.abs();
        self.apply(|x| x.max(-limit).min(limit));
        self
    }
}

macro_rules! processed_copy {
    ($($(#[$doc:meta])* $name:ident($($arg:ident: $ty:ident),*);)+) => {
        $(
            $(#[$doc])*
            pub fn $name<T: RealFloat>(buffer: &RealBuffer<T>, $($arg: $ty),*) -> RealBuffer<T> {
                let mut out = buffer.clone();
                BufferProcessing::$name(&mut out, $($arg),*);
                out
            }
        )+
    };
}

processed_copy! {
    /// Absolute value of every sample.
    abs();
    /// `e^x` of every sample.
    exp();
    /// Natural logarithm of every sample.
    log();
    /// Natural logarithm of every sample. Alias of [`log`].
    ln();
    /// Base-10 logarithm of every sample.
    log10();
    /// Every sample raised to `exponent`.
    pow(exponent: T);
    /// Every sample clamped into `[-|limit|, |limit|]`.
    saturate(limit: T);
}
