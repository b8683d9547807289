//! Numeric sequence producers.
//!
//! Each producer is a small stateful iterator: calling `next()` advances it
//! by one value. Producers are forward-only; create a fresh one to start
//! over from the beginning.

mod prime;
mod triangular;

pub use prime::{prime_bound_for, Primes};
pub use triangular::Triangular;

use std::fmt;

/// The sequences that can be listed from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SequenceKind {
    Prime,
    Triangular,
}

impl SequenceKind {
    /// First `count` values of this sequence.
    pub fn take(self, count: usize) -> Vec<u128> {
        match self {
            SequenceKind::Prime => Primes::unbounded().take(count).map(u128::from).collect(),
            SequenceKind::Triangular => Triangular::new().take(count).collect(),
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKind::Prime => write!(f, "prime"),
            SequenceKind::Triangular => write!(f, "triangular"),
        }
    }
}
