//! Star field generation
//!
//! Decides how many stars the constellation has, then places and classifies
//! each one. Every star consumes exactly four samples in the order x, y,
//! color, size.

use crate::algorithm::features::FeatureRecorder;
use crate::algorithm::sampler::{SampleUse, Sampler};
use crate::io::error::Result;
use crate::spatial::geometry::Point;
use crate::spatial::padding::EdgePadding;
use serde::Serialize;

/// Upper bound of the raw star count
pub const MAX_STARS: usize = 16;
/// Smallest constellation; lower raw counts are raised to this
pub const MIN_STARS: usize = 4;

/// Smallest star diameter
pub const MIN_STAR_DIAMETER: f64 = 2.0;
/// Width of the star diameter range
pub const STAR_DIAMETER_RANGE: f64 = 10.0;

/// Constellation size label derived from the star count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstellationSize {
    /// Exactly four stars
    Micro,
    /// Five to nine stars
    Medium,
    /// Ten to thirteen stars
    Mega,
    /// Fourteen to sixteen stars
    Giga,
}

impl ConstellationSize {
    /// Turn a count sample into the star count and its label
    ///
    /// The raw count is `round(sample * 16)`; anything at or below four is
    /// clamped to four.
    pub fn from_sample(sample: f64) -> (usize, Self) {
        let raw = (sample * MAX_STARS as f64).round() as usize;
        match raw {
            count if count <= MIN_STARS => (MIN_STARS, Self::Micro),
            count if count <= 9 => (count, Self::Medium),
            count if count <= 13 => (count, Self::Mega),
            count => (count.min(MAX_STARS), Self::Giga),
        }
    }

    /// Feature label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Medium => "medium",
            Self::Mega => "mega",
            Self::Giga => "giga",
        }
    }
}

/// Star color category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarColor {
    /// Rare deep gold
    Gold,
    /// Pale yellow
    Yellow,
    /// Plain white
    White,
}

impl StarColor {
    /// Classify a color sample
    pub fn from_sample(sample: f64) -> Self {
        if sample < 0.10 {
            Self::Gold
        } else if sample <= 0.35 {
            Self::Yellow
        } else {
            Self::White
        }
    }

    /// Fill color of the star
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Gold => [0xff, 0xcd, 0x3c],
            Self::Yellow => [0xff, 0xfd, 0xb3],
            Self::White => [0xff, 0xff, 0xff],
        }
    }
}

/// Star size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarSize {
    /// Diameter up to 4
    Micro,
    /// Diameter above 4 up to 7
    Medium,
    /// Diameter above 7 up to 10
    Mega,
    /// Diameter above 10
    Giga,
}

impl StarSize {
    /// Classify a star diameter
    pub fn from_diameter(diameter: f64) -> Self {
        if diameter <= 4.0 {
            Self::Micro
        } else if diameter <= 7.0 {
            Self::Medium
        } else if diameter <= 10.0 {
            Self::Mega
        } else {
            Self::Giga
        }
    }
}

/// A generated star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Padded canvas position
    pub position: Point,
    /// Color category
    pub color: StarColor,
    /// Diameter in pixels, in `[2, 12)`
    pub diameter: f64,
}

impl Star {
    /// Size category of the star
    pub fn size(&self) -> StarSize {
        StarSize::from_diameter(self.diameter)
    }
}

/// Convert a size sample into a star diameter in `[2, 12)`
// Unfused: diameters must be bit-identical on every platform
#[allow(clippy::suboptimal_flops)]
pub fn star_diameter(sample: f64) -> f64 {
    sample * STAR_DIAMETER_RANGE + MIN_STAR_DIAMETER
}

/// Generate every star of the constellation in generation order
///
/// Records the constellation size label and all seven star counters.
///
/// # Errors
///
/// Returns an error if the constellation size was already recorded
pub fn generate_stars<S: Sampler + ?Sized>(
    sampler: &mut S,
    size: u32,
    features: &mut FeatureRecorder,
) -> Result<Vec<Star>> {
    let (count, label) = ConstellationSize::from_sample(sampler.sample(SampleUse::StarCount));
    features.record_constellation_size(label)?;

    let padding = EdgePadding::for_canvas(size);
    let extent = f64::from(size);
    tracing::debug!(
        stars = count,
        constellation = label.as_str(),
        mid = padding.mid(),
        padding = padding.padding(),
        "placing stars"
    );
    let mut stars = Vec::with_capacity(count);

    for _ in 0..count {
        let x = padding.apply(sampler.sample(SampleUse::StarX) * extent);
        let y = padding.apply(sampler.sample(SampleUse::StarY) * extent);

        let color = StarColor::from_sample(sampler.sample(SampleUse::StarColor));
        features.count_color(color);

        let diameter = star_diameter(sampler.sample(SampleUse::StarSize));
        let star = Star {
            position: Point::new(x, y),
            color,
            diameter,
        };
        features.count_size(star.size());
        tracing::trace!(
            x = star.position.x,
            y = star.position.y,
            color = ?star.color,
            diameter = star.diameter,
            "placed star"
        );

        stars.push(star);
    }

    Ok(stars)
}
