pub mod completions;
pub mod init;
pub mod options;
pub mod render;
pub mod sequence;
pub mod validate;
pub mod watch;

use clap::{Parser, Subcommand};

/// pixseq - Pixel grids coloured by number sequences
#[derive(Parser, Debug)]
#[command(name = "pixseq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a pixel grid to SVG, PNG, or JSON
    Render(render::RenderArgs),

    /// Re-render whenever the settings file changes
    Watch(watch::WatchArgs),

    /// Print values of a number sequence
    Sequence(sequence::SequenceArgs),

    /// Check a settings file without rendering
    Validate(validate::ValidateArgs),

    /// Write a starter pixseq.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
