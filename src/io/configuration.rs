//! Rendering constants and runtime configuration defaults

// Canvas settings
/// Default canvas side length in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 1000;

// Keeps a single frame buffer well under a gigabyte
/// Maximum allowed canvas side length
pub const MAX_CANVAS_SIZE: u32 = 8192;

// Stroke widths
/// Width of the scan lines that paint the sky gradient
pub const GRADIENT_STROKE_WEIGHT: u32 = 3;
/// Width of the lines connecting stars
pub const PATH_STROKE_WEIGHT: f64 = 3.0;
/// Color of the lines connecting stars
pub const PATH_COLOR: [u8; 3] = [255, 255, 255];

// Animation settings
/// Delay between segment frames (one segment per second)
pub const FRAME_DELAY_MS: u32 = 1000;
/// Multiplier applied to the delay of the completed frame
pub const FINAL_FRAME_HOLD: u32 = 5;

// Output settings
/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Extension of the rendered still image
pub const IMAGE_EXTENSION: &str = "png";
/// Extension of the path animation
pub const ANIMATION_EXTENSION: &str = "gif";
/// Extension of the feature metadata
pub const METADATA_EXTENSION: &str = "json";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
