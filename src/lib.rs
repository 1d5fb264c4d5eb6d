//! Deterministic night-sky constellation tokens
//!
//! A seed hash drives a single stream of samples that picks a sky gradient,
//! places and classifies a handful of stars, and orders them into a closed
//! path. The same seed always yields the same image and the same features.

#![forbid(unsafe_code)]

/// Sampling, classification, star placement and path composition
pub mod algorithm;
/// Command line, rendering, export and error handling
pub mod io;
/// Mathematical utilities for interpolation
pub mod math;
/// Canvas geometry and edge padding
pub mod spatial;

pub use algorithm::executor::{Token, generate, generate_from_seed};
pub use algorithm::sampler::{Sampler, Seed};
pub use io::error::{Result, TokenError};
