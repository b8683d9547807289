use clap::Args;

use crate::error::{PixseqError, Result};
use crate::output::{display_path, Printer};
use crate::validation::{print_diagnostics, validate_settings};

use super::options::SettingsArgs;

/// Check a settings file without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    if let Some(path) = &args.settings.settings {
        printer.status("Checking", &display_path(path));
    }

    let file = args.settings.resolve()?;
    let result = validate_settings(&file);
    print_diagnostics(&result, printer);

    let failed = result.has_errors() || (args.strict && result.warning_count() > 0);
    if failed {
        return Err(PixseqError::Validation {
            message: "settings check failed".to_string(),
            help: None,
        });
    }

    Ok(())
}
