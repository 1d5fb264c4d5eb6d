//! Frame-by-frame replay of a token's path and GIF export
//!
//! The animation only reads the finished token. Frame zero shows the sky and
//! stars, every following frame adds one segment, and the frame that closes
//! the loop is held longer.

use crate::algorithm::executor::Token;
use crate::io::configuration::{FINAL_FRAME_HOLD, FRAME_DELAY_MS};
use crate::io::error::{Result, TokenError, ensure_parent_dir};
use crate::io::image::{paint_segment, render_sky_and_stars};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Replays the drawing of a token's path one segment at a time
pub struct PathAnimation<'a> {
    token: &'a Token,
    frame_delay_ms: u32,
}

impl<'a> PathAnimation<'a> {
    /// Animation of `token` with the default one second per segment
    pub const fn new(token: &'a Token) -> Self {
        Self {
            token,
            frame_delay_ms: FRAME_DELAY_MS,
        }
    }

    /// Use a different delay between frames
    #[must_use]
    pub const fn with_frame_delay(mut self, frame_delay_ms: u32) -> Self {
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    /// Number of frames, one more than the number of segments
    pub fn frame_count(&self) -> usize {
        self.token.path().len() + 1
    }

    /// Canvas after the first `segments` segments have been drawn
    pub fn canvas_after(&self, segments: usize) -> RgbaImage {
        let mut img = render_sky_and_stars(self.token);
        for segment in self.token.path().segments().take(segments) {
            paint_segment(&mut img, segment);
        }
        img
    }

    /// Every frame of the animation in display order
    pub fn frames(&self) -> Vec<Frame> {
        let mut canvas = render_sky_and_stars(self.token);
        let mut frames = Vec::with_capacity(self.frame_count());
        frames.push(Self::frame(canvas.clone(), self.frame_delay_ms));

        let total = self.token.path().len();
        for (index, segment) in self.token.path().segments().enumerate() {
            paint_segment(&mut canvas, segment);
            let delay = if index + 1 == total {
                self.frame_delay_ms * FINAL_FRAME_HOLD
            } else {
                self.frame_delay_ms
            };
            frames.push(Self::frame(canvas.clone(), delay));
        }

        frames
    }

    fn frame(canvas: RgbaImage, delay_ms: u32) -> Frame {
        Frame::from_parts(canvas, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }

    /// Encode the animation as a GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<()> {
        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| TokenError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(self.frames())
            .map_err(|e| TokenError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(
            path = %output_path.display(),
            frames = self.frame_count(),
            "wrote animation"
        );
        Ok(())
    }
}
