//! Rasterization of tokens and PNG export
//!
//! Pixels are sampled at their centers with no anti-aliasing, so a token
//! always rasterizes to the same bytes.

use crate::algorithm::executor::Token;
use crate::io::configuration::{GRADIENT_STROKE_WEIGHT, PATH_COLOR, PATH_STROKE_WEIGHT};
use crate::io::error::{Result, TokenError, ensure_parent_dir};
use crate::spatial::geometry::{Point, Segment};
use image::{Rgba, RgbaImage};
use std::path::Path;

const fn opaque(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 255])
}

// Pixel index range covering [min, max] on one axis, clipped to the canvas
fn pixel_span(min: f64, max: f64, size: u32) -> std::ops::Range<u32> {
    let start = min.floor().max(0.0) as u32;
    let end = (max.ceil().max(0.0) as u32).min(size);
    start.min(end)..end
}

fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

/// Paint the sky gradient into a fresh canvas
///
/// Scan lines are drawn top to bottom with a stroke wider than a pixel, so
/// each row ends up with the color of the line drawn just below it.
pub fn paint_background(token: &Token) -> RgbaImage {
    let size = token.size();
    let colors = token.background().scanline_colors(size);
    let overdraw = GRADIENT_STROKE_WEIGHT / 2;

    let mut img = RgbaImage::new(size, size);
    for (y, row) in img.enumerate_rows_mut() {
        let line = (y + overdraw).min(size) as usize;
        let color = colors
            .get(line)
            .copied()
            .unwrap_or(token.background().target);
        for (_, _, pixel) in row {
            *pixel = opaque(color);
        }
    }
    img
}

/// Fill a disc of the given diameter centered on `center`
pub fn fill_disc(img: &mut RgbaImage, center: Point, diameter: f64, rgb: [u8; 3]) {
    let radius = diameter / 2.0;
    let (width, height) = img.dimensions();
    for y in pixel_span(center.y - radius, center.y + radius, height) {
        for x in pixel_span(center.x - radius, center.x + radius, width) {
            if pixel_center(x, y).distance(center) <= radius {
                img.put_pixel(x, y, opaque(rgb));
            }
        }
    }
}

/// Stroke a segment with round caps
pub fn stroke_segment(img: &mut RgbaImage, segment: Segment, weight: f64, rgb: [u8; 3]) {
    let half = weight / 2.0;
    let (min, max) = segment.bounds(half);
    let (width, height) = img.dimensions();
    for y in pixel_span(min.y, max.y, height) {
        for x in pixel_span(min.x, max.x, width) {
            if segment.distance_to(pixel_center(x, y)) <= half {
                img.put_pixel(x, y, opaque(rgb));
            }
        }
    }
}

/// Paint every star in generation order
pub fn paint_stars(img: &mut RgbaImage, token: &Token) {
    for star in token.stars() {
        fill_disc(img, star.position, star.diameter, star.color.rgb());
    }
}

/// Stroke one path segment in the path style
pub fn paint_segment(img: &mut RgbaImage, segment: Segment) {
    stroke_segment(img, segment, PATH_STROKE_WEIGHT, PATH_COLOR);
}

/// Background with every star painted but no path yet
pub fn render_sky_and_stars(token: &Token) -> RgbaImage {
    let mut img = paint_background(token);
    paint_stars(&mut img, token);
    img
}

/// Render the complete token: sky, stars and the closed path
pub fn render_token(token: &Token) -> RgbaImage {
    let mut img = render_sky_and_stars(token);
    for segment in token.path().segments() {
        paint_segment(&mut img, segment);
    }
    img
}

/// Render a token and save it as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_token_as_png(token: &Token, output_path: &Path) -> Result<()> {
    let img = render_token(token);

    ensure_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| TokenError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), "wrote image");
    Ok(())
}
