//! Settings file loading.

mod settings_file;

pub use settings_file::{
    ChannelConfig, ChannelsConfig, SettingsFile, DEFAULT_SETTINGS, SETTINGS_FILENAME,
};
