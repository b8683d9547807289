//! SVG output: one `<rect>` per pixel.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{PixseqError, Result};
use crate::types::{Dimensions, Pixel};

/// Render pixels as an SVG document of size `dims`.
pub fn render_svg(pixels: &[Pixel], dims: Dimensions, pixel_size: u32) -> String {
    let mut svg = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        dims.width, dims.height
    );
    svg.push_str("<g>\n");
    for pixel in pixels {
        let _ = writeln!(
            svg,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            pixel.x, pixel.y, pixel_size, pixel_size, pixel.colour
        );
    }
    svg.push_str("</g>\n</svg>\n");

    svg
}

/// Write pixels to an SVG file.
pub fn write_svg(pixels: &[Pixel], dims: Dimensions, pixel_size: u32, path: &Path) -> Result<()> {
    fs::write(path, render_svg(pixels, dims, pixel_size)).map_err(|e| PixseqError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write SVG: {}", e),
    })
}
