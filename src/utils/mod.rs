//! Utility helpers that sit beside the core buffer operations.

pub mod comparison;
