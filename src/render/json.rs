//! JSON output: the pixel list as an array of `{x, y, colour}` objects.

use std::fs;
use std::path::Path;

use crate::error::{PixseqError, Result};
use crate::types::Pixel;

/// Serialize pixels as pretty-printed JSON.
pub fn render_json(pixels: &[Pixel]) -> Result<String> {
    serde_json::to_string_pretty(pixels).map_err(|e| PixseqError::Render {
        message: format!("Failed to serialize pixels: {}", e),
        help: None,
    })
}

/// Write pixels to a JSON file.
pub fn write_json(pixels: &[Pixel], path: &Path) -> Result<()> {
    let json = render_json(pixels)?;
    fs::write(path, json).map_err(|e| PixseqError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write pixel list: {}", e),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;
    use tempfile::tempdir;

    #[test]
    fn test_render_json() {
        let pixels = vec![
            Pixel::new(0, 0, Rgb::new(2, 1, 9)),
            Pixel::new(2, 0, Rgb::new(3, 3, 9)),
        ];
        let json = render_json(&pixels).unwrap();

        insta::assert_snapshot!(json, @r#"
        [
          {
            "x": 0,
            "y": 0,
            "colour": "rgb(2, 1, 9)"
          },
          {
            "x": 2,
            "y": 0,
            "colour": "rgb(3, 3, 9)"
          }
        ]
        "#);
    }

    #[test]
    fn test_write_json_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pixels.json");
        let pixels = vec![Pixel::new(4, 8, Rgb::new(0, 254, 300))];

        write_json(&pixels, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["x"], 4);
        assert_eq!(parsed[0]["y"], 8);
        assert_eq!(parsed[0]["colour"], "rgb(0, 254, 300)");
    }
}
