//! PNG output for pixel grids.
//!
//! Each pixel becomes an opaque `pixel_size` square, clipped to the canvas.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{PixseqError, Result};
use crate::types::{Dimensions, Pixel};

/// Rasterise pixels onto a canvas of `dims`.
///
/// Components outside 0..=255 (from custom channel values) are clamped.
/// Canvas areas no pixel covers stay transparent.
pub fn rasterize(pixels: &[Pixel], dims: Dimensions, pixel_size: u32) -> RgbaImage {
    let size = pixel_size.max(1);
    let mut img: RgbaImage = ImageBuffer::new(dims.width, dims.height);

    for pixel in pixels {
        let [r, g, b] = pixel.colour.to_bytes();
        let rgba = Rgba([r, g, b, 255]);

        let x_end = pixel.x.saturating_add(size).min(dims.width);
        let y_end = pixel.y.saturating_add(size).min(dims.height);
        for py in pixel.y..y_end {
            for px in pixel.x..x_end {
                img.put_pixel(px, py, rgba);
            }
        }
    }

    img
}

/// Write a pixel grid to a PNG file.
///
/// # Arguments
///
/// * `pixels` - The grid to draw
/// * `dims` - Canvas size
/// * `pixel_size` - Side length of each square
/// * `path` - Output file path
pub fn write_png(pixels: &[Pixel], dims: Dimensions, pixel_size: u32, path: &Path) -> Result<()> {
    if dims.width == 0 || dims.height == 0 {
        return Err(PixseqError::Render {
            message: format!("Cannot write an empty {} PNG", dims),
            help: Some("Use a canvas at least 1x1".to_string()),
        });
    }

    let img = rasterize(pixels, dims, pixel_size);

    img.save(path).map_err(|e| PixseqError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let pixels = vec![
            Pixel::new(0, 0, Rgb::new(0, 0, 0)),
            Pixel::new(1, 0, Rgb::new(254, 254, 254)),
        ];

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&pixels, Dimensions::new(2, 1), 1, &path).unwrap();

        assert!(path.exists());

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 1);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [254, 254, 254, 255]);
    }

    #[test]
    fn test_squares_filled() {
        let pixels = vec![
            Pixel::new(0, 0, Rgb::new(255, 0, 0)),
            Pixel::new(2, 0, Rgb::new(0, 255, 0)),
        ];

        let img = rasterize(&pixels, Dimensions::new(4, 2), 2);

        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(3, 1).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_squares_clipped_to_canvas() {
        // 5x5 canvas at stride 2 leaves a one-pixel border of partial squares.
        let pixels = vec![Pixel::new(4, 4, Rgb::new(9, 9, 9))];
        let img = rasterize(&pixels, Dimensions::new(5, 5), 2);
        assert_eq!(img.get_pixel(4, 4).0, [9, 9, 9, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_out_of_range_components_clamped() {
        let pixels = vec![Pixel::new(0, 0, Rgb::new(-20, 300, 128))];
        let img = rasterize(&pixels, Dimensions::new(1, 1), 1);
        assert_eq!(img.get_pixel(0, 0).0, [0, 255, 128, 255]);
    }

    #[test]
    fn test_write_png_empty_canvas_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");
        assert!(write_png(&[], Dimensions::new(0, 4), 1, &path).is_err());
        assert!(!path.exists());
    }
}
