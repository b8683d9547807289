//! Render settings and canvas dimensions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PixseqError, Result};

use super::{ChannelMap, ChannelType};

/// Grid scan orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// Rows top to bottom, each row left to right.
    #[default]
    #[serde(rename = "0")]
    Deg0,
    /// Columns left to right, each column top to bottom.
    #[serde(rename = "90")]
    Deg90,
}

impl FromStr for Rotation {
    type Err = PixseqError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "0" => Ok(Rotation::Deg0),
            "90" => Ok(Rotation::Deg90),
            other => Err(PixseqError::InvalidRotation(other.to_string())),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Deg0 => write!(f, "0"),
            Rotation::Deg90 => write!(f, "90"),
        }
    }
}

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel area, used as the default prime bound.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Immutable snapshot of everything a grid build needs besides the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pixel_size: u32,
    pub rotation: Rotation,
    pub channel_types: ChannelMap<ChannelType>,
    pub custom_values: ChannelMap<i64>,
}

impl Settings {
    /// Create settings, rejecting a zero pixel size.
    pub fn new(
        pixel_size: u32,
        rotation: Rotation,
        channel_types: ChannelMap<ChannelType>,
        custom_values: ChannelMap<i64>,
    ) -> Result<Self> {
        if pixel_size == 0 {
            return Err(PixseqError::Validation {
                message: "pixel size must be positive".to_string(),
                help: Some("Use a pixel size of 1 or more".to_string()),
            });
        }

        Ok(Self {
            pixel_size,
            rotation,
            channel_types,
            custom_values,
        })
    }

    /// Side length of each rendered square. Always at least 1.
    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_from_str() {
        assert_eq!("0".parse::<Rotation>().unwrap(), Rotation::Deg0);
        assert_eq!("90".parse::<Rotation>().unwrap(), Rotation::Deg90);
        assert!(matches!(
            "180".parse::<Rotation>(),
            Err(PixseqError::InvalidRotation(_))
        ));
    }

    #[test]
    fn test_rotation_serde_tokens() {
        let r: Rotation = serde_yaml::from_str("\"90\"").unwrap();
        assert_eq!(r, Rotation::Deg90);
        assert_eq!(serde_json::to_string(&Rotation::Deg0).unwrap(), "\"0\"");
    }

    #[test]
    fn test_settings_rejects_zero_pixel_size() {
        let result = Settings::new(
            0,
            Rotation::Deg0,
            ChannelMap::splat(ChannelType::Prime),
            ChannelMap::splat(0),
        );
        assert!(matches!(result, Err(PixseqError::Validation { .. })));
    }

    #[test]
    fn test_settings_new() {
        let settings = Settings::new(
            4,
            Rotation::Deg90,
            ChannelMap::new(ChannelType::Prime, ChannelType::Random, ChannelType::Custom),
            ChannelMap::new(0, 0, 300),
        )
        .unwrap();
        assert_eq!(settings.pixel_size(), 4);
        assert_eq!(settings.custom_values.blue, 300);
    }

    #[test]
    fn test_dimensions() {
        let dims = Dimensions::new(640, 480);
        assert_eq!(dims.area(), 307_200);
        assert_eq!(dims.to_string(), "640x480");
    }
}
