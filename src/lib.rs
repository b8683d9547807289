//! pixseq - Pixel grids coloured by number sequences
//!
//! Each pixel's red, green and blue channels are fed by a prime sequence,
//! a triangular-number sequence, a random draw, or a fixed constant. The
//! library builds the positioned pixel list; renderers write it as SVG,
//! PNG or JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod output;
pub mod render;
pub mod sequence;
pub mod types;
pub mod validation;
pub mod watch;

pub use config::{SettingsFile, SETTINGS_FILENAME};
pub use error::{PixseqError, Result};
pub use grid::{build_grid, build_grid_from, compose_channel, compose_pixel, CandidateValues};
pub use render::{render_json, render_svg, write_output, write_png, OutputFormat};
pub use sequence::{Primes, SequenceKind, Triangular};
pub use types::{Channel, ChannelMap, ChannelType, Dimensions, Pixel, Rgb, Rotation, Settings};
pub use validation::{validate_settings, Diagnostic, Severity, ValidationResult};
