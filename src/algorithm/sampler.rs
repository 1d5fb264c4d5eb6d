//! Deterministic sample source and seed handling
//!
//! Every random decision in a generation goes through a [`Sampler`]. Each draw
//! is tagged with the [`SampleUse`] that consumes it, so the sample plan of a
//! generation can be recorded and checked with [`SampleLog`].

use crate::io::error::{Result, invalid_parameter, invalid_seed};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::fmt;
use std::str::FromStr;

/// Number of bytes in a seed hash
pub const SEED_BYTES: usize = 32;

/// The step of the generation that consumes a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleUse {
    /// Sky palette selection
    Sky,
    /// Number of stars in the constellation
    StarCount,
    /// Raw horizontal star position
    StarX,
    /// Raw vertical star position
    StarY,
    /// Star color category
    StarColor,
    /// Star diameter
    StarSize,
    /// Path ordering strategy
    Algorithm,
}

/// Deterministic source of samples in `[0, 1)`
///
/// The purpose tag never influences the returned value; only the number of
/// prior draws does.
pub trait Sampler {
    /// Draw the next sample
    fn sample(&mut self, purpose: SampleUse) -> f64;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(&mut self, purpose: SampleUse) -> f64 {
        (**self).sample(purpose)
    }
}

/// A token hash that fully determines a generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed {
    bytes: [u8; SEED_BYTES],
}

impl Seed {
    /// Seed from raw bytes
    pub const fn from_bytes(bytes: [u8; SEED_BYTES]) -> Self {
        Self { bytes }
    }

    /// Mint a fresh seed from operating system entropy
    pub fn random() -> Self {
        Self {
            bytes: rand::random(),
        }
    }

    /// Raw seed bytes
    pub const fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.bytes
    }
}

impl FromStr for Seed {
    type Err = crate::io::error::TokenError;

    /// Parse 64 hexadecimal characters, optionally prefixed with `0x`
    fn from_str(hash: &str) -> Result<Self> {
        let trimmed = hash.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != SEED_BYTES * 2 {
            return Err(invalid_seed(
                hash,
                &format!(
                    "expected {} hexadecimal characters, found {}",
                    SEED_BYTES * 2,
                    digits.len()
                ),
            ));
        }

        let mut bytes = [0u8; SEED_BYTES];
        for (byte, pair) in bytes.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
            let text = std::str::from_utf8(pair)
                .map_err(|_utf8_error| invalid_seed(hash, &"contains non-ASCII characters"))?;
            *byte = u8::from_str_radix(text, 16).map_err(|_parse_error| {
                invalid_seed(hash, &format!("'{text}' is not a hexadecimal byte"))
            })?;
        }

        Ok(Self { bytes })
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Sampler backed by a seeded pseudo-random generator
///
/// The generator is pinned to ChaCha12 so a hash maps to the same token
/// across `rand` releases.
pub struct SeededSampler {
    rng: ChaCha12Rng,
    draws: usize,
}

impl SeededSampler {
    /// Create a sampler whose sequence is fixed by `seed`
    pub fn new(seed: &Seed) -> Self {
        Self {
            rng: ChaCha12Rng::from_seed(seed.bytes),
            draws: 0,
        }
    }

    /// Number of samples drawn so far
    pub const fn draws(&self) -> usize {
        self.draws
    }
}

impl Sampler for SeededSampler {
    fn sample(&mut self, _purpose: SampleUse) -> f64 {
        self.draws += 1;
        self.rng.random::<f64>()
    }
}

/// Sampler that replays a fixed script of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSampler {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSampler {
    /// Create a sampler replaying `values` in order
    ///
    /// # Errors
    ///
    /// Returns an error if the script is empty or any value lies outside `[0, 1)`
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(invalid_parameter(
                "script",
                &"[]",
                &"at least one sample is required",
            ));
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(invalid_parameter(
                "script",
                bad,
                &"samples must lie in [0, 1)",
            ));
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Create a sampler returning `value` on every draw
    ///
    /// # Errors
    ///
    /// Returns an error if `value` lies outside `[0, 1)`
    pub fn constant(value: f64) -> Result<Self> {
        Self::new(vec![value])
    }
}

impl Sampler for ScriptedSampler {
    fn sample(&mut self, _purpose: SampleUse) -> f64 {
        let value = self
            .values
            .get(self.cursor % self.values.len())
            .copied()
            .unwrap_or_default();
        self.cursor += 1;
        value
    }
}

/// Wraps a sampler and records every draw with its purpose
pub struct SampleLog<S> {
    inner: S,
    draws: Vec<(SampleUse, f64)>,
}

impl<S: Sampler> SampleLog<S> {
    /// Start recording draws from `inner`
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            draws: Vec::new(),
        }
    }

    /// Every draw so far, in order
    pub fn draws(&self) -> &[(SampleUse, f64)] {
        &self.draws
    }

    /// The purposes of every draw so far, in order
    pub fn plan(&self) -> Vec<SampleUse> {
        self.draws.iter().map(|(purpose, _)| *purpose).collect()
    }

    /// Stop recording and return the wrapped sampler
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sampler> Sampler for SampleLog<S> {
    fn sample(&mut self, purpose: SampleUse) -> f64 {
        let value = self.inner.sample(purpose);
        self.draws.push((purpose, value));
        value
    }
}
