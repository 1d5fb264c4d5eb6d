//! Feature metadata written alongside rendered tokens

use crate::algorithm::executor::Token;
use crate::algorithm::features::Features;
use crate::algorithm::sampler::Seed;
use crate::io::error::{Result, TokenError, ensure_parent_dir};
use crate::spatial::geometry::Point;
use serde::Serialize;
use std::path::Path;

/// Serializable description of a generated token
#[derive(Debug, Serialize)]
pub struct TokenMetadata<'a> {
    /// Seed hash, lowercase hexadecimal
    pub hash: String,
    /// Canvas side length in pixels
    pub size: u32,
    /// Path points in draw order
    pub path: &'a [Point],
    /// Published feature set
    pub features: &'a Features,
}

impl<'a> TokenMetadata<'a> {
    /// Describe `token`, generated from `seed`
    pub fn new(seed: &Seed, token: &'a Token) -> Self {
        Self {
            hash: seed.to_string(),
            size: token.size(),
            path: token.path().points(),
            features: token.features(),
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the metadata of `token` as JSON
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - Serialization or writing the file fails
pub fn export_metadata(seed: &Seed, token: &Token, output_path: &Path) -> Result<()> {
    let json = TokenMetadata::new(seed, token)
        .to_json()
        .map_err(|e| match e {
            TokenError::Metadata { source, .. } => TokenError::Metadata {
                path: output_path.to_path_buf(),
                source,
            },
            other => other,
        })?;

    ensure_parent_dir(output_path)?;

    std::fs::write(output_path, json).map_err(|e| TokenError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write metadata",
        source: e,
    })?;

    tracing::info!(path = %output_path.display(), "wrote metadata");
    Ok(())
}
