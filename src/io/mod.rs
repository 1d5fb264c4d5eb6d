//! Everything outside the deterministic core: command line, rendering,
//! export and errors

/// Command-line parsing and batch orchestration
pub mod cli;
/// Defaults and rendering constants
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Rasterization and PNG export
pub mod image;
/// Feature metadata export
pub mod metadata;
/// Batch progress display
pub mod progress;
/// Path animation and GIF export
pub mod visualization;
