//! Settings flags shared by `render`, `watch`, and `validate`.
//!
//! Flags override values from the settings file.

use std::path::PathBuf;

use clap::Args;

use crate::config::SettingsFile;
use crate::error::Result;
use crate::types::{ChannelType, Rotation};

#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Settings file (default: ./pixseq.yaml if present)
    #[arg(long, short)]
    pub settings: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Side length of each square
    #[arg(long, short = 'p')]
    pub pixel_size: Option<u32>,

    /// Scan orientation: "0" or "90"
    #[arg(long)]
    pub rotation: Option<Rotation>,

    /// Red channel source
    #[arg(long, value_enum)]
    pub red: Option<ChannelType>,

    /// Green channel source
    #[arg(long, value_enum)]
    pub green: Option<ChannelType>,

    /// Blue channel source
    #[arg(long, value_enum)]
    pub blue: Option<ChannelType>,

    /// Red value for a custom red channel
    #[arg(long, allow_negative_numbers = true)]
    pub red_value: Option<i64>,

    /// Green value for a custom green channel
    #[arg(long, allow_negative_numbers = true)]
    pub green_value: Option<i64>,

    /// Blue value for a custom blue channel
    #[arg(long, allow_negative_numbers = true)]
    pub blue_value: Option<i64>,

    /// Seed for random channels
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (.svg, .png, or .json)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl SettingsArgs {
    /// Load the settings file and apply flag overrides.
    pub fn resolve(&self) -> Result<SettingsFile> {
        let mut file = SettingsFile::discover(self.settings.as_deref())?;
        self.apply(&mut file);
        Ok(file)
    }

    /// Apply flag overrides to an already loaded file.
    pub fn apply(&self, file: &mut SettingsFile) {
        if let Some(width) = self.width {
            file.width = width;
        }
        if let Some(height) = self.height {
            file.height = height;
        }
        if let Some(pixel_size) = self.pixel_size {
            file.pixel_size = pixel_size;
        }
        if let Some(rotation) = self.rotation {
            file.rotation = rotation;
        }
        if let Some(seed) = self.seed {
            file.seed = Some(seed);
        }
        if let Some(output) = &self.output {
            file.output = output.clone();
        }

        let channels = &mut file.channels;
        for (config, ty, value) in [
            (&mut channels.red, self.red, self.red_value),
            (&mut channels.green, self.green, self.green_value),
            (&mut channels.blue, self.blue, self.blue_value),
        ] {
            if let Some(ty) = ty {
                config.ty = ty;
            }
            if let Some(value) = value {
                config.value = value;
            }
        }
    }
}
