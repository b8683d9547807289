//! Validation for pixseq settings files.
//!
//! Runs a suite of checks against loaded settings and reports errors and
//! warnings. Used by `pixseq validate` and before each `pixseq render`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::config::SettingsFile;
use crate::output::{plural, Printer};

/// Run all validation checks against a settings file.
pub fn validate_settings(file: &SettingsFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_pixel_size(file));
    result.merge(checks::check_canvas(file));
    result.merge(checks::check_custom_values(file));
    result.merge(checks::check_output(file));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("{}{}: {}", label, printer.dim(&format!("[{}]", d.code)), d.message);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.cyan("help:"), help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
    } else if warnings > 0 {
        printer.warning("Checked", &plural(warnings, "warning", "warnings"));
    } else {
        printer.success("Checked", "no problems found");
    }
}
