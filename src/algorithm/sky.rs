//! Sky palette selection and the background gradient
//!
//! One sample picks the sky. The gradient runs from a fixed near-black base
//! at the top of the canvas to the sky's target color at the bottom.

use crate::algorithm::features::FeatureRecorder;
use crate::algorithm::sampler::{SampleUse, Sampler};
use crate::io::error::Result;
use crate::math::interpolation::{lerp_rgb, map_range};
use serde::Serialize;

/// Samples below this bound produce a dusk sky
pub const DUSK_THRESHOLD: f64 = 0.10;
/// Samples up to and including this bound produce a moonlit sky
pub const MOONLIT_THRESHOLD: f64 = 0.35;

/// Color at the top of every sky
pub const BASE_COLOR: [u8; 3] = [7, 7, 9];

/// Categorical sky label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sky {
    /// Warm red horizon
    Dusk,
    /// Blue-gray horizon
    Moonlit,
    /// Deep navy horizon
    Midnight,
}

impl Sky {
    /// Classify a sample into a sky
    pub fn from_sample(sample: f64) -> Self {
        if sample < DUSK_THRESHOLD {
            Self::Dusk
        } else if sample <= MOONLIT_THRESHOLD {
            Self::Moonlit
        } else {
            Self::Midnight
        }
    }

    /// Gradient target color at the bottom of the canvas
    pub const fn target_color(self) -> [u8; 3] {
        match self {
            Self::Dusk => [117, 0, 0],
            Self::Moonlit => [84, 107, 171],
            Self::Midnight => [12, 16, 48],
        }
    }

    /// Feature label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dusk => "dusk",
            Self::Moonlit => "moonlit",
            Self::Midnight => "midnight",
        }
    }
}

/// The two endpoint colors of the background gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    /// Color of the first scan line
    pub base: [u8; 3],
    /// Color of the last scan line
    pub target: [u8; 3],
}

impl Background {
    /// Background for a sky
    pub const fn for_sky(sky: Sky) -> Self {
        Self {
            base: BASE_COLOR,
            target: sky.target_color(),
        }
    }

    /// Color of scan line `line` on a canvas of side `size`
    ///
    /// Lines past `size` keep the target color.
    pub fn scanline_color(&self, line: u32, size: u32) -> [u8; 3] {
        let amount = map_range(
            f64::from(line.min(size)),
            0.0,
            f64::from(size),
            0.0,
            1.0,
        );
        lerp_rgb(self.base, self.target, amount)
    }

    /// All `size + 1` scan line colors from top to bottom
    pub fn scanline_colors(&self, size: u32) -> Vec<[u8; 3]> {
        (0..=size)
            .map(|line| self.scanline_color(line, size))
            .collect()
    }
}

/// Draw one sample, choose the sky and record it
///
/// # Errors
///
/// Returns an error if the sky feature was already recorded
pub fn choose_sky<S: Sampler + ?Sized>(
    sampler: &mut S,
    features: &mut FeatureRecorder,
) -> Result<Background> {
    let sky = Sky::from_sample(sampler.sample(SampleUse::Sky));
    features.record_sky(sky)?;
    Ok(Background::for_sky(sky))
}
