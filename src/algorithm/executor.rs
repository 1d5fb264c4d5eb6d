use crate::{
    algorithm::features::{FeatureRecorder, Features},
    algorithm::field::{Star, generate_stars},
    algorithm::path::{StarPath, compose_path},
    algorithm::sampler::{Sampler, Seed, SeededSampler},
    algorithm::sky::{Background, choose_sky},
    io::configuration::MAX_CANVAS_SIZE,
    io::error::{Result, invalid_parameter},
};

/// A finished constellation
///
/// Everything is fixed once generation returns; accessors only hand out
/// shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    size: u32,
    background: Background,
    stars: Vec<Star>,
    path: StarPath,
    features: Features,
}

impl Token {
    /// Canvas side length in pixels
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Background gradient endpoints
    pub const fn background(&self) -> &Background {
        &self.background
    }

    /// Stars in generation order, which is also their draw order
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Closed path through the stars in composed order
    pub const fn path(&self) -> &StarPath {
        &self.path
    }

    /// Published feature set
    pub const fn features(&self) -> &Features {
        &self.features
    }
}

/// Validate a canvas side length before any sample is drawn
///
/// # Errors
///
/// Returns an error if `size` is zero or larger than [`MAX_CANVAS_SIZE`]
pub fn validate_canvas_size(size: u32) -> Result<()> {
    if size == 0 {
        return Err(invalid_parameter(
            "size",
            &size,
            &"canvas must be at least one pixel wide",
        ));
    }
    if size > MAX_CANVAS_SIZE {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("canvas must not exceed {MAX_CANVAS_SIZE} pixels"),
        ));
    }
    Ok(())
}

/// Run the full pipeline: sky, star field, path, then publish features
///
/// Samples are drawn in a fixed order: sky, star count, four per star
/// (x, y, color, size) and finally the path algorithm.
///
/// # Errors
///
/// Returns an error if the canvas size is invalid. Nothing is sampled in
/// that case.
#[tracing::instrument(skip(sampler))]
pub fn generate<S: Sampler + ?Sized>(sampler: &mut S, size: u32) -> Result<Token> {
    validate_canvas_size(size)?;

    let mut recorder = FeatureRecorder::new();

    let background = choose_sky(sampler, &mut recorder)?;
    let stars = generate_stars(sampler, size, &mut recorder)?;
    let path = compose_path(&stars, sampler, &mut recorder)?;

    let features = recorder.finish()?;
    tracing::debug!(
        sky = features.sky.as_str(),
        stars = stars.len(),
        constellation = features.constellation_size.as_str(),
        algorithm = features.algorithm.as_str(),
        "generated constellation"
    );

    Ok(Token {
        size,
        background,
        stars,
        path,
        features,
    })
}

/// Generate the token a seed hash stands for
///
/// # Errors
///
/// Returns an error if the canvas size is invalid
pub fn generate_from_seed(seed: &Seed, size: u32) -> Result<Token> {
    tracing::debug!(%seed, "seeding sampler");
    let mut sampler = SeededSampler::new(seed);
    generate(&mut sampler, size)
}
