//! Progress display for batches of tokens

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Tokens: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many tokens of a batch have been written
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
    skipped: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Progress manager that tracks state without drawing anything
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(0),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            completed: 0,
            skipped: 0,
        }
    }

    /// Set the number of tokens in the batch
    pub fn initialize(&mut self, token_count: usize) {
        self.completed = 0;
        self.skipped = 0;
        self.bar.set_length(token_count as u64);
        self.bar.set_position(0);
    }

    /// Show the hash currently being generated
    pub fn start_token(&self, hash: &str) {
        let short = hash.get(..12).unwrap_or(hash);
        self.bar.set_message(format!("{short}…"));
    }

    /// Count a token as written
    pub fn complete_token(&mut self) {
        self.completed += 1;
        self.bar.inc(1);
    }

    /// Count a token as skipped because its output already exists
    pub fn skip_token(&mut self) {
        self.skipped += 1;
        self.bar.inc(1);
    }

    /// Number of tokens written so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of tokens skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Close the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} written, {} skipped",
            self.completed, self.skipped
        ));
    }
}
