//! Settings file (pixseq.yaml) parsing.
//!
//! The settings file holds everything one render pass needs: canvas size,
//! pixel size, rotation, and the source of each colour channel.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PixseqError, Result};
use crate::types::{ChannelMap, ChannelType, Dimensions, Rotation, Settings};

/// Default settings file name.
pub const SETTINGS_FILENAME: &str = "pixseq.yaml";

/// Template written by `pixseq init`.
pub const DEFAULT_SETTINGS: &str = r#"# pixseq settings
#
# Channel types: prime, triangular, random, custom.
# `value` is only used by custom channels.

width: 640
height: 480
pixel_size: 4
rotation: "0"
output: pixseq.svg
# seed: 42

channels:
  red:
    type: prime
  green:
    type: triangular
  blue:
    type: custom
    value: 128
"#;

/// Source configuration for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelConfig {
    #[serde(rename = "type", default)]
    pub ty: ChannelType,

    /// Constant for custom channels. Not clamped.
    #[serde(default)]
    pub value: i64,
}

/// Per-channel configuration; missing channels are random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelsConfig {
    #[serde(default)]
    pub red: ChannelConfig,
    #[serde(default)]
    pub green: ChannelConfig,
    #[serde(default)]
    pub blue: ChannelConfig,
}

impl ChannelsConfig {
    fn to_map(self) -> ChannelMap<ChannelConfig> {
        ChannelMap::new(self.red, self.green, self.blue)
    }

    /// Channel types, one per channel.
    pub fn types(&self) -> ChannelMap<ChannelType> {
        self.to_map().map(|_, c| c.ty)
    }

    /// Custom values, one per channel.
    pub fn values(&self) -> ChannelMap<i64> {
        self.to_map().map(|_, c| c.value)
    }
}

/// Settings loaded from pixseq.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Side length of each rendered square.
    pub pixel_size: u32,

    /// Scan orientation, "0" or "90".
    pub rotation: Rotation,

    /// Seed for random channels. Entropy-seeded when absent.
    pub seed: Option<u64>,

    /// Output file; the extension picks the format.
    pub output: PathBuf,

    pub channels: ChannelsConfig,
}

fn default_output() -> PathBuf {
    PathBuf::from("pixseq.svg")
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            pixel_size: 1,
            rotation: Rotation::Deg0,
            seed: None,
            output: default_output(),
            channels: ChannelsConfig::default(),
        }
    }
}

impl SettingsFile {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PixseqError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| PixseqError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", SETTINGS_FILENAME)),
        })
    }

    /// Load from `path` if given, then `./pixseq.yaml` if present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let local = Path::new(SETTINGS_FILENAME);
        if local.exists() {
            Self::load(local)
        } else {
            Ok(Self::default())
        }
    }

    /// The render-pass snapshot described by this file.
    pub fn settings(&self) -> Result<Settings> {
        Settings::new(
            self.pixel_size,
            self.rotation,
            self.channels.types(),
            self.channels.values(),
        )
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}
