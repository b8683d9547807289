//! Sequence command implementation.
//!
//! Prints producer values to stdout, one per line or as a JSON array.

use std::io::{self, Write};

use clap::Args;

use crate::error::{PixseqError, Result};
use crate::sequence::{Primes, SequenceKind};

/// Print values of a number sequence
#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// Sequence to print
    #[arg(value_enum)]
    pub kind: SequenceKind,

    /// Number of values to print
    #[arg(long, short = 'n', default_value = "10")]
    pub count: usize,

    /// Print only primes below this bound (prime only; ignores --count)
    #[arg(long)]
    pub below: Option<u64>,

    /// Print a JSON array instead of one value per line
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SequenceArgs) -> Result<()> {
    let values = values(&args)?;
    let mut stdout = io::stdout().lock();
    write_values(&mut stdout, &values, args.json)?;
    Ok(())
}

fn values(args: &SequenceArgs) -> Result<Vec<u128>> {
    match (args.kind, args.below) {
        (SequenceKind::Prime, Some(bound)) => Ok(Primes::below(bound).map(u128::from).collect()),
        (SequenceKind::Triangular, Some(_)) => Err(PixseqError::Parse {
            message: "--below only applies to the prime sequence".to_string(),
            help: Some("Use --count to limit triangular numbers".to_string()),
        }),
        (kind, None) => Ok(kind.take(args.count)),
    }
}

fn write_values(out: &mut impl Write, values: &[u128], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, values).map_err(|e| PixseqError::Render {
            message: format!("Failed to serialize sequence: {}", e),
            help: None,
        })?;
        writeln!(out)?;
    } else {
        for value in values {
            writeln!(out, "{}", value)?;
        }
    }
    Ok(())
}
