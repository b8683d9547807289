//! Render command implementation.
//!
//! Builds one pixel grid from the resolved settings and writes it out.

use std::fs;

use clap::Args;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SettingsFile;
use crate::error::{PixseqError, Result};
use crate::grid::build_grid;
use crate::output::{display_path, plural, Printer};
use crate::render::write_output;
use crate::validation::{print_diagnostics, validate_settings};

use super::options::SettingsArgs;

/// Render a pixel grid to SVG, PNG, or JSON
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let file = args.settings.resolve()?;
    check(&file, printer)?;
    render_pass(&file, printer)?;
    Ok(())
}

/// Validate settings, printing diagnostics when there are any.
///
/// Fails if any check reported an error.
pub fn check(file: &SettingsFile, printer: &Printer) -> Result<()> {
    let result = validate_settings(file);
    if !result.is_ok() {
        print_diagnostics(&result, printer);
    }

    if result.has_errors() {
        return Err(PixseqError::Validation {
            message: format!("{} in settings", plural(result.error_count(), "error", "errors")),
            help: Some("Run `pixseq validate` for details".to_string()),
        });
    }

    Ok(())
}

/// One full render pass: fresh producers, fresh pixel list, one output file.
///
/// Returns the number of pixels written.
pub fn render_pass(file: &SettingsFile, printer: &Printer) -> Result<usize> {
    let settings = file.settings()?;
    let dims = file.dimensions();

    printer.status(
        "Rendering",
        &format!("{} at pixel size {}", dims, settings.pixel_size()),
    );

    let mut rng = match file.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let pixels = build_grid(&settings, dims, &mut rng);
    info!(
        "built {} (red={}, green={}, blue={}, rotation={})",
        plural(pixels.len(), "pixel", "pixels"),
        settings.channel_types.red,
        settings.channel_types.green,
        settings.channel_types.blue,
        settings.rotation
    );

    if let Some(parent) = file.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| PixseqError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    write_output(&pixels, dims, settings.pixel_size(), &file.output)?;

    printer.success(
        "Finished",
        &format!(
            "{} -> {}",
            plural(pixels.len(), "pixel", "pixels"),
            display_path(&file.output)
        ),
    );

    Ok(pixels.len())
}
