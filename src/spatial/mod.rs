//! Canvas geometry
//!
//! This module contains spatial-related functionality including:
//! - Points, segments and distances
//! - Edge padding of star coordinates

/// Points, segments and distance queries
pub mod geometry;
/// Edge padding transform for raw star coordinates
pub mod padding;

pub use geometry::{Point, Segment};
