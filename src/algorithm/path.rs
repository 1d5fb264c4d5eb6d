//! Ordering stars into the closed path that gets drawn

use crate::algorithm::features::FeatureRecorder;
use crate::algorithm::field::Star;
use crate::algorithm::sampler::{SampleUse, Sampler};
use crate::io::error::Result;
use crate::spatial::geometry::{Point, Segment};
use serde::Serialize;
use std::cmp::Ordering;

/// Samples below this bound sort stars top to bottom
pub const DESCEND_THRESHOLD: f64 = 0.30;
/// Samples below this bound (and at or above the previous) sort left to right
pub const ORDERLY_THRESHOLD: f64 = 0.80;

/// Strategy used to order the stars of the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathAlgorithm {
    /// Ascending y, top to bottom
    Descend,
    /// Ascending x, left to right
    Orderly,
    /// Generation order
    Chaotic,
}

impl PathAlgorithm {
    /// Choose the strategy for a sample
    pub fn from_sample(sample: f64) -> Self {
        if sample < DESCEND_THRESHOLD {
            Self::Descend
        } else if sample < ORDERLY_THRESHOLD {
            Self::Orderly
        } else {
            Self::Chaotic
        }
    }

    /// Feature label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descend => "descend",
            Self::Orderly => "orderly",
            Self::Chaotic => "chaotic",
        }
    }

    /// Reorder points in place
    ///
    /// Sorting is stable, so points sharing a key keep their relative order.
    pub fn arrange(self, points: &mut [Point]) {
        match self {
            Self::Descend => {
                points.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal));
            }
            Self::Orderly => {
                points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
            }
            Self::Chaotic => {}
        }
    }
}

/// A closed polygon through every star
///
/// Consecutive points are connected, and the last point connects back to the
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct StarPath {
    points: Vec<Point>,
}

impl StarPath {
    /// Path visiting `points` in the given order
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points in draw order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points, which equals the number of segments
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Segments in draw order, ending with the one that closes the loop
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            points: &self.points,
            index: 0,
        }
    }
}

/// Restartable iterator over the segments of a [`StarPath`]
///
/// Clone it to replay the path from the current position.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    points: &'a [Point],
    index: usize,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let from = self.points.get(self.index).copied()?;
        let to = self
            .points
            .get(self.index + 1)
            .or_else(|| self.points.first())
            .copied()?;
        self.index += 1;
        Some(Segment::new(from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.points.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}

/// Draw one sample, choose the ordering strategy and build the path
///
/// # Errors
///
/// Returns an error if the algorithm feature was already recorded
pub fn compose_path<S: Sampler + ?Sized>(
    stars: &[Star],
    sampler: &mut S,
    features: &mut FeatureRecorder,
) -> Result<StarPath> {
    let algorithm = PathAlgorithm::from_sample(sampler.sample(SampleUse::Algorithm));
    features.record_algorithm(algorithm)?;

    let mut points: Vec<Point> = stars.iter().map(|star| star.position).collect();
    algorithm.arrange(&mut points);
    Ok(StarPath::new(points))
}
