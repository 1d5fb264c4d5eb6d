//! Feature accumulation during generation and the published feature set
//!
//! [`FeatureRecorder`] is threaded through the pipeline by mutable reference.
//! The sky, constellation size and algorithm labels can each be written once;
//! the seven star counters only ever grow. [`FeatureRecorder::finish`]
//! consumes the recorder, so a published [`Features`] can no longer change.

use crate::algorithm::field::{ConstellationSize, StarColor, StarSize};
use crate::algorithm::path::PathAlgorithm;
use crate::algorithm::sky::Sky;
use crate::io::error::{Result, TokenError};
use serde::Serialize;

/// Feature key of the white star counter
pub const WHITE_STARS: &str = "white stars";
/// Feature key of the yellow star counter
pub const YELLOW_STARS: &str = "yellow stars";
/// Feature key of the gold star counter
pub const GOLD_STARS: &str = "gold stars";
/// Feature key of the micro star counter
pub const MICRO_STARS: &str = "micro stars";
/// Feature key of the medium star counter
pub const MEDIUM_STARS: &str = "medium stars";
/// Feature key of the mega star counter
pub const MEGA_STARS: &str = "mega stars";
/// Feature key of the giga star counter
pub const GIGA_STARS: &str = "giga stars";
/// Feature key of the sky label
pub const SKY: &str = "sky";
/// Feature key of the constellation size label
pub const CONSTELLATION_SIZE: &str = "constellation size";
/// Feature key of the path algorithm label
pub const ALGORITHM: &str = "algorithm";

/// All feature keys in publication order
pub const FEATURE_KEYS: [&str; 10] = [
    WHITE_STARS,
    YELLOW_STARS,
    GOLD_STARS,
    MICRO_STARS,
    MEDIUM_STARS,
    MEGA_STARS,
    GIGA_STARS,
    SKY,
    CONSTELLATION_SIZE,
    ALGORITHM,
];

/// Mutable feature state while a token is being generated
#[derive(Debug, Default)]
pub struct FeatureRecorder {
    white_stars: u32,
    yellow_stars: u32,
    gold_stars: u32,
    micro_stars: u32,
    medium_stars: u32,
    mega_stars: u32,
    giga_stars: u32,
    sky: Option<Sky>,
    constellation_size: Option<ConstellationSize>,
    algorithm: Option<PathAlgorithm>,
}

// Write-once slot shared by the three label setters
fn set_once<T>(slot: &mut Option<T>, value: T, feature: &'static str) -> Result<()> {
    if slot.is_some() {
        return Err(TokenError::FeatureRewrite { feature });
    }
    *slot = Some(value);
    Ok(())
}

impl FeatureRecorder {
    /// Empty recorder with all counters at zero and no labels
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the sky label
    ///
    /// # Errors
    ///
    /// Returns an error if the sky was already recorded
    pub fn record_sky(&mut self, sky: Sky) -> Result<()> {
        set_once(&mut self.sky, sky, SKY)
    }

    /// Record the constellation size label
    ///
    /// # Errors
    ///
    /// Returns an error if the constellation size was already recorded
    pub fn record_constellation_size(&mut self, size: ConstellationSize) -> Result<()> {
        set_once(&mut self.constellation_size, size, CONSTELLATION_SIZE)
    }

    /// Record the path algorithm label
    ///
    /// # Errors
    ///
    /// Returns an error if the algorithm was already recorded
    pub fn record_algorithm(&mut self, algorithm: PathAlgorithm) -> Result<()> {
        set_once(&mut self.algorithm, algorithm, ALGORITHM)
    }

    /// Count one star of the given color
    pub const fn count_color(&mut self, color: StarColor) {
        match color {
            StarColor::White => self.white_stars += 1,
            StarColor::Yellow => self.yellow_stars += 1,
            StarColor::Gold => self.gold_stars += 1,
        }
    }

    /// Count one star of the given size category
    pub const fn count_size(&mut self, size: StarSize) {
        match size {
            StarSize::Micro => self.micro_stars += 1,
            StarSize::Medium => self.medium_stars += 1,
            StarSize::Mega => self.mega_stars += 1,
            StarSize::Giga => self.giga_stars += 1,
        }
    }

    /// Publish the feature set
    ///
    /// # Errors
    ///
    /// Returns an error naming the first label that was never recorded
    pub fn finish(self) -> Result<Features> {
        Ok(Features {
            white_stars: self.white_stars,
            yellow_stars: self.yellow_stars,
            gold_stars: self.gold_stars,
            micro_stars: self.micro_stars,
            medium_stars: self.medium_stars,
            mega_stars: self.mega_stars,
            giga_stars: self.giga_stars,
            sky: self
                .sky
                .ok_or(TokenError::MissingFeature { feature: SKY })?,
            constellation_size: self.constellation_size.ok_or(TokenError::MissingFeature {
                feature: CONSTELLATION_SIZE,
            })?,
            algorithm: self
                .algorithm
                .ok_or(TokenError::MissingFeature { feature: ALGORITHM })?,
        })
    }
}

/// Value of a single feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureValue {
    /// A star counter
    Count(u32),
    /// A categorical label
    Label(&'static str),
}

/// The finished, immutable feature set of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Features {
    /// Number of white stars
    #[serde(rename = "white stars")]
    pub white_stars: u32,
    /// Number of yellow stars
    #[serde(rename = "yellow stars")]
    pub yellow_stars: u32,
    /// Number of gold stars
    #[serde(rename = "gold stars")]
    pub gold_stars: u32,
    /// Number of stars with diameter up to 4
    #[serde(rename = "micro stars")]
    pub micro_stars: u32,
    /// Number of stars with diameter in (4, 7]
    #[serde(rename = "medium stars")]
    pub medium_stars: u32,
    /// Number of stars with diameter in (7, 10]
    #[serde(rename = "mega stars")]
    pub mega_stars: u32,
    /// Number of stars with diameter above 10
    #[serde(rename = "giga stars")]
    pub giga_stars: u32,
    /// Sky label
    pub sky: Sky,
    /// Constellation size label
    #[serde(rename = "constellation size")]
    pub constellation_size: ConstellationSize,
    /// Path algorithm label
    pub algorithm: PathAlgorithm,
}

impl Features {
    /// Sum of the three color counters
    pub const fn color_total(&self) -> u32 {
        self.white_stars + self.yellow_stars + self.gold_stars
    }

    /// Sum of the four size counters
    pub const fn size_total(&self) -> u32 {
        self.micro_stars + self.medium_stars + self.mega_stars + self.giga_stars
    }

    /// Every feature as a key/value pair, in publication order
    pub const fn entries(&self) -> [(&'static str, FeatureValue); 10] {
        [
            (WHITE_STARS, FeatureValue::Count(self.white_stars)),
            (YELLOW_STARS, FeatureValue::Count(self.yellow_stars)),
            (GOLD_STARS, FeatureValue::Count(self.gold_stars)),
            (MICRO_STARS, FeatureValue::Count(self.micro_stars)),
            (MEDIUM_STARS, FeatureValue::Count(self.medium_stars)),
            (MEGA_STARS, FeatureValue::Count(self.mega_stars)),
            (GIGA_STARS, FeatureValue::Count(self.giga_stars)),
            (SKY, FeatureValue::Label(self.sky.as_str())),
            (
                CONSTELLATION_SIZE,
                FeatureValue::Label(self.constellation_size.as_str()),
            ),
            (ALGORITHM, FeatureValue::Label(self.algorithm.as_str())),
        ]
    }
}
