//! Core domain types for pixseq.
//!
//! - `ChannelType` / `ChannelMap` - per-channel value sources
//! - `Settings` / `Dimensions` - inputs to a grid build
//! - `Pixel` / `Rgb` - the grid build's output

mod channel;
mod pixel;
mod settings;

pub use channel::{Channel, ChannelMap, ChannelType};
pub use pixel::{Pixel, Rgb};
pub use settings::{Dimensions, Rotation, Settings};
