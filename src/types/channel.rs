//! Colour channels and the sources that feed them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PixseqError, Result};

/// Where a colour channel takes its value from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    /// Next prime, modulo 255.
    Prime,
    /// Next triangular number, modulo 255.
    Triangular,
    /// Uniform draw from 0..255.
    #[default]
    Random,
    /// The channel's configured constant.
    Custom,
}

impl ChannelType {
    pub const ALL: [ChannelType; 4] = [
        ChannelType::Prime,
        ChannelType::Triangular,
        ChannelType::Random,
        ChannelType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelType::Prime => "prime",
            ChannelType::Triangular => "triangular",
            ChannelType::Random => "random",
            ChannelType::Custom => "custom",
        }
    }
}

impl FromStr for ChannelType {
    type Err = PixseqError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "prime" => Ok(ChannelType::Prime),
            "triangular" => Ok(ChannelType::Triangular),
            "random" => Ok(ChannelType::Random),
            "custom" => Ok(ChannelType::Custom),
            other => Err(PixseqError::InvalidChannelType(other.to_string())),
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three colour channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Channels in composition order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exactly one value per colour channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelMap<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

impl<T> ChannelMap<T> {
    pub const fn new(red: T, green: T, blue: T) -> Self {
        Self { red, green, blue }
    }

    pub fn get(&self, channel: Channel) -> &T {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Apply `f` to each channel's value in red, green, blue order.
    pub fn map<U>(self, mut f: impl FnMut(Channel, T) -> U) -> ChannelMap<U> {
        ChannelMap {
            red: f(Channel::Red, self.red),
            green: f(Channel::Green, self.green),
            blue: f(Channel::Blue, self.blue),
        }
    }

    /// Iterate `(channel, value)` pairs in red, green, blue order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &T)> {
        Channel::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl<T: Copy> ChannelMap<T> {
    /// The same value on every channel.
    pub const fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }
}
