//! Init command implementation.
//!
//! Writes a starter `pixseq.yaml` with every setting spelled out.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{DEFAULT_SETTINGS, SETTINGS_FILENAME};
use crate::error::{PixseqError, Result};
use crate::output::{display_path, Printer};

/// Write a starter pixseq.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing pixseq.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let settings_path = args.path.join(SETTINGS_FILENAME);

    if settings_path.exists() && !args.force {
        return Err(PixseqError::Validation {
            message: format!("{} already exists", SETTINGS_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| PixseqError::Io {
            path: args.path.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    fs::write(&settings_path, DEFAULT_SETTINGS).map_err(|e| PixseqError::Io {
        path: settings_path.clone(),
        message: format!("Failed to write settings: {}", e),
    })?;

    printer.success("Created", &display_path(&settings_path));

    Ok(())
}
