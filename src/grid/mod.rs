//! Pixel grid construction.
//!
//! Turns settings and canvas dimensions into an ordered list of coloured
//! pixels, drawing one value from each sequence producer per cell.

mod builder;
mod compose;

pub use builder::{build_grid, build_grid_from, cell_count};
pub use compose::{
    compose_channel, compose_pixel, random_channel, reduce, CandidateValues, CHANNEL_MODULUS,
};
