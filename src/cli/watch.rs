//! Watch command implementation.
//!
//! Renders once, then re-renders each time the settings file settles after
//! a change. Failed passes are reported and the watch continues.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use log::debug;

use crate::config::SETTINGS_FILENAME;
use crate::error::{PixseqError, Result};
use crate::output::{display_path, Printer};
use crate::watch::{FileWatcher, DEFAULT_DELAY};

use super::options::SettingsArgs;
use super::render::{check, render_pass};

/// Re-render whenever the settings file changes
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Quiet period in milliseconds before re-rendering
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    pub delay: u64,
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let path = watched_path(&args.settings)?;
    let watcher = FileWatcher::new(&path, Duration::from_millis(args.delay))?;

    pass(&args.settings, printer);
    printer.info("Watching", &display_path(&path));

    while let Some(events) = watcher.wait() {
        debug!("{} change event(s) coalesced", events);
        pass(&args.settings, printer);
    }

    Ok(())
}

/// The settings file to watch: `--settings`, else ./pixseq.yaml.
fn watched_path(args: &SettingsArgs) -> Result<PathBuf> {
    let path = args
        .settings
        .clone()
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILENAME));

    if !path.exists() {
        return Err(PixseqError::Io {
            path,
            message: "Settings file not found (run `pixseq init` to create one)".to_string(),
        });
    }

    Ok(path)
}

/// Re-read settings and render, reporting rather than propagating failures.
fn pass(args: &SettingsArgs, printer: &Printer) {
    let result = args
        .resolve()
        .and_then(|file| check(&file, printer).map(|_| file))
        .and_then(|file| render_pass(&file, printer));

    if let Err(e) = result {
        printer.error("Failed", &e.to_string());
    }
}
