//! Mathematical utilities for the generator

/// Linear interpolation for gradients and range mapping
pub mod interpolation;
