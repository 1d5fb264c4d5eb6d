//! Command-line interface for generating batches of tokens

use crate::algorithm::executor::{generate_from_seed, validate_canvas_size};
use crate::algorithm::sampler::Seed;
use crate::io::configuration::{
    ANIMATION_EXTENSION, DEFAULT_CANVAS_SIZE, DEFAULT_OUTPUT_DIR, IMAGE_EXTENSION,
    METADATA_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_token_as_png;
use crate::io::metadata::export_metadata;
use crate::io::progress::ProgressManager;
use crate::io::visualization::PathAnimation;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "constellation")]
#[command(
    author,
    version,
    about = "Generate deterministic night-sky constellations from seed hashes"
)]
/// Command-line arguments for the token generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Seed hashes to render (64 hexadecimal characters each)
    #[arg(value_name = "HASH")]
    pub hashes: Vec<String>,

    /// Mint this many fresh random hashes in addition to the given ones
    #[arg(short = 'n', long, default_value_t = 0)]
    pub random: usize,

    /// Canvas side length in pixels
    #[arg(short, long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub size: u32,

    /// Directory to write images and metadata into
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Also write a GIF that draws the path one segment at a time
    #[arg(short, long)]
    pub animate: bool,

    /// Do not write the JSON feature metadata
    #[arg(long)]
    pub no_metadata: bool,

    /// Regenerate tokens even if their image exists
    #[arg(long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every generation decision
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Maximum level of log events to emit
    pub const fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }

    /// Parse the given hashes and append the requested number of fresh ones
    ///
    /// # Errors
    ///
    /// Returns an error if any hash is malformed or no token was requested
    pub fn collect_seeds(&self) -> Result<Vec<Seed>> {
        let mut seeds = self
            .hashes
            .iter()
            .map(|hash| hash.parse::<Seed>())
            .collect::<Result<Vec<_>>>()?;
        seeds.extend((0..self.random).map(|_| Seed::random()));

        if seeds.is_empty() {
            return Err(invalid_parameter(
                "hashes",
                &"",
                &"provide at least one hash or use --random",
            ));
        }
        Ok(seeds)
    }
}

/// Orchestrates generation and export of every requested token
pub struct TokenProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TokenProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export tokens according to CLI arguments
    ///
    /// Every hash and the canvas size are validated before the first token
    /// is generated.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or any export fails
    pub fn process(&mut self) -> Result<()> {
        validate_canvas_size(self.cli.size)?;
        let seeds = self.cli.collect_seeds()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        for seed in &seeds {
            self.process_seed(seed)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_seed(&mut self, seed: &Seed) -> Result<()> {
        let hash = seed.to_string();
        let image_path = self.output_path(&hash, IMAGE_EXTENSION);

        if self.cli.skip_existing() && image_path.exists() {
            tracing::info!(path = %image_path.display(), "skipping, output exists");
            if let Some(ref mut pm) = self.progress_manager {
                pm.skip_token();
            }
            return Ok(());
        }

        if let Some(ref pm) = self.progress_manager {
            pm.start_token(&hash);
        }

        let token = generate_from_seed(seed, self.cli.size)?;

        export_token_as_png(&token, &image_path)?;

        if self.cli.animate {
            PathAnimation::new(&token)
                .export_gif(&self.output_path(&hash, ANIMATION_EXTENSION))?;
        }

        if !self.cli.no_metadata {
            export_metadata(
                seed,
                &token,
                &self.output_path(&hash, METADATA_EXTENSION),
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_token();
        }

        Ok(())
    }

    /// Output file for a hash with the given extension
    pub fn output_path(&self, hash: &str, extension: &str) -> PathBuf {
        output_file(&self.cli.output, hash, extension)
    }
}

/// Path of `<dir>/<hash>.<extension>`
pub fn output_file(dir: &Path, hash: &str, extension: &str) -> PathBuf {
    dir.join(format!("{hash}.{extension}"))
}
