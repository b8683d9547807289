//! Rendering module for pixseq.
//!
//! Writes a built pixel grid to SVG, PNG, or JSON. The format is chosen
//! from the output file's extension.

mod json;
mod png;
mod svg;

use std::path::Path;

pub use json::{render_json, write_json};
pub use png::{rasterize, write_png};
pub use svg::{render_svg, write_svg};

use crate::error::{PixseqError, Result};
use crate::types::{Dimensions, Pixel};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

impl OutputFormat {
    /// Determine the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "json" => Ok(OutputFormat::Json),
            _ => Err(PixseqError::Render {
                message: format!("Unsupported output file: {}", path.display()),
                help: Some("Use a .svg, .png, or .json extension".to_string()),
            }),
        }
    }
}

/// Write pixels to `path` in the format its extension names.
pub fn write_output(
    pixels: &[Pixel],
    dims: Dimensions,
    pixel_size: u32,
    path: &Path,
) -> Result<()> {
    match OutputFormat::from_path(path)? {
        OutputFormat::Svg => write_svg(pixels, dims, pixel_size, path),
        OutputFormat::Png => write_png(pixels, dims, pixel_size, path),
        OutputFormat::Json => write_json(pixels, path),
    }
}
