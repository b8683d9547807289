//! Validation checks for settings files.
//!
//! Each check takes a `&SettingsFile` and returns a `ValidationResult`.

use crate::config::SettingsFile;
use crate::render::OutputFormat;
use crate::types::ChannelType;

use super::warning::{Diagnostic, ValidationResult};

/// Largest value a sequence or random channel can produce.
const CHANNEL_MAX: i64 = 254;

/// A zero pixel size would never advance the scan.
pub fn check_pixel_size(file: &SettingsFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    if file.pixel_size == 0 {
        result.push(
            Diagnostic::error("pixseq::validate::pixel-size", "pixel_size is 0")
                .with_help("Use a pixel size of 1 or more"),
        );
    }

    result
}

/// Check for an empty canvas, or squares larger than the canvas.
pub fn check_canvas(file: &SettingsFile) -> ValidationResult {
    let mut result = ValidationResult::new();
    let dims = file.dimensions();

    if dims.width == 0 || dims.height == 0 {
        result.push(
            Diagnostic::error(
                "pixseq::validate::empty-canvas",
                format!("Canvas {} has no area", dims),
            )
            .with_help("Set width and height to at least 1"),
        );
    } else if file.pixel_size > dims.width || file.pixel_size > dims.height {
        result.push(Diagnostic::warning(
            "pixseq::validate::oversized-pixel",
            format!(
                "pixel_size {} exceeds the {} canvas; only one row or column is drawn",
                file.pixel_size, dims
            ),
        ));
    }

    result
}

/// Check custom values: out-of-range constants and values that are ignored.
pub fn check_custom_values(file: &SettingsFile) -> ValidationResult {
    let mut result = ValidationResult::new();
    let types = file.channels.types();
    let values = file.channels.values();

    for (channel, &ty) in types.iter() {
        let value = *values.get(channel);

        if ty == ChannelType::Custom && !(0..=CHANNEL_MAX).contains(&value) {
            result.push(
                Diagnostic::warning(
                    "pixseq::validate::custom-range",
                    format!(
                        "Custom {} value {} is outside 0..={}",
                        channel, value, CHANNEL_MAX
                    ),
                )
                .with_help("PNG output clamps it; SVG and JSON output keep it as written"),
            );
        } else if ty != ChannelType::Custom && value != 0 {
            result.push(Diagnostic::warning(
                "pixseq::validate::unused-value",
                format!(
                    "{} channel is {} so its value {} is ignored",
                    channel, ty, value
                ),
            ));
        }
    }

    result
}

/// Check that the output file has a supported extension.
pub fn check_output(file: &SettingsFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Err(e) = OutputFormat::from_path(&file.output) {
        result.push(
            Diagnostic::error("pixseq::validate::output", e.to_string())
                .with_help("Use a .svg, .png, or .json extension"),
        );
    }

    result
}
