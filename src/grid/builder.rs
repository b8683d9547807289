//! Grid builder.
//!
//! Scans the canvas at `pixel_size` stride and composes one pixel per cell.

use log::{debug, warn};
use rand::Rng;

use crate::sequence::{prime_bound_for, Primes, Triangular};
use crate::types::{Dimensions, Pixel, Rotation, Settings};

use super::compose::{compose_pixel, random_channel, reduce};

/// Number of cells a build over `dims` produces.
pub fn cell_count(settings: &Settings, dims: Dimensions) -> u64 {
    let step = settings.pixel_size() as u64;
    let cols = (dims.width as u64).div_ceil(step);
    let rows = (dims.height as u64).div_ceil(step);
    cols * rows
}

/// Build the full pixel list for one render pass.
///
/// Fresh prime and triangular producers are created for the pass. The prime
/// bound starts at the canvas area and is raised if the canvas has more
/// cells than primes below its area.
pub fn build_grid<R: Rng + ?Sized>(
    settings: &Settings,
    dims: Dimensions,
    rng: &mut R,
) -> Vec<Pixel> {
    let cells = cell_count(settings, dims);
    let bound = prime_bound_for(cells, dims.area());
    debug!(
        "building {} grid: {} cells, pixel size {}, prime bound {}",
        dims,
        cells,
        settings.pixel_size(),
        bound
    );

    build_grid_from(settings, dims, Primes::below(bound), Triangular::new(), rng)
}

/// Build a pixel list drawing sequence values from the given producers.
///
/// Exactly one value is taken from each producer per cell, in scan order.
/// A producer that runs dry contributes 0 for the remaining cells.
pub fn build_grid_from<P, T, R>(
    settings: &Settings,
    dims: Dimensions,
    mut primes: P,
    mut triangular: T,
    rng: &mut R,
) -> Vec<Pixel>
where
    P: Iterator<Item = u64>,
    T: Iterator<Item = u128>,
    R: Rng + ?Sized,
{
    let step = settings.pixel_size() as usize;
    let (outer, inner) = match settings.rotation {
        Rotation::Deg0 => (dims.height, dims.width),
        Rotation::Deg90 => (dims.width, dims.height),
    };

    let mut pixels = Vec::with_capacity(cell_count(settings, dims) as usize);
    let mut exhausted = false;

    for i in (0..outer).step_by(step) {
        for j in (0..inner).step_by(step) {
            let prime = primes.next();
            let tri = triangular.next();
            if (prime.is_none() || tri.is_none()) && !exhausted {
                warn!("sequence producer exhausted after {} cells", pixels.len());
                exhausted = true;
            }

            let prime = reduce(prime.unwrap_or(0u64));
            let tri = reduce(tri.unwrap_or(0u128));
            let random = random_channel(rng);

            let colour = compose_pixel(
                &settings.channel_types,
                &settings.custom_values,
                prime,
                tri,
                random,
            );

            let (x, y) = match settings.rotation {
                Rotation::Deg0 => (j, i),
                Rotation::Deg90 => (i, j),
            };

            pixels.push(Pixel::new(x, y, colour));
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChannelMap, ChannelType, Rgb};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings(pixel_size: u32, rotation: Rotation, types: ChannelMap<ChannelType>) -> Settings {
        Settings::new(pixel_size, rotation, types, ChannelMap::new(11, 22, 33)).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn coords(pixels: &[Pixel]) -> Vec<(u32, u32)> {
        pixels.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_four_by_two_stride_two() {
        let s = settings(2, Rotation::Deg0, ChannelMap::splat(ChannelType::Prime));
        let pixels = build_grid(&s, Dimensions::new(4, 2), &mut rng());

        assert_eq!(coords(&pixels), vec![(0, 0), (2, 0)]);
        assert_eq!(pixels[0].colour, Rgb::new(2, 2, 2));
        assert_eq!(pixels[1].colour, Rgb::new(3, 3, 3));
    }

    #[test]
    fn test_scan_order_rotation_zero() {
        let s = settings(1, Rotation::Deg0, ChannelMap::splat(ChannelType::Custom));
        let pixels = build_grid(&s, Dimensions::new(3, 2), &mut rng());
        assert_eq!(
            coords(&pixels),
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_scan_order_rotation_ninety() {
        let s = settings(1, Rotation::Deg90, ChannelMap::splat(ChannelType::Custom));
        let pixels = build_grid(&s, Dimensions::new(3, 2), &mut rng());
        assert_eq!(
            coords(&pixels),
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn test_rotation_ninety_transposes_coordinates() {
        let dims = Dimensions::new(5, 3);
        let s0 = settings(1, Rotation::Deg0, ChannelMap::splat(ChannelType::Custom));
        let s90 = settings(1, Rotation::Deg90, ChannelMap::splat(ChannelType::Custom));
        let transposed = Dimensions::new(3, 5);

        let mut a: Vec<(u32, u32)> = coords(&build_grid(&s0, dims, &mut rng()))
            .into_iter()
            .map(|(x, y)| (y, x))
            .collect();
        let mut b = coords(&build_grid(&s90, transposed, &mut rng()));
        a.sort();
        b.sort();
        assert_eq!(a, b);

        // Same coordinate set, different visiting order.
        let mut c = coords(&build_grid(&s0, dims, &mut rng()));
        let mut d = coords(&build_grid(&s90, dims, &mut rng()));
        assert_ne!(c, d);
        c.sort();
        d.sort();
        assert_eq!(c, d);
    }

    #[test]
    fn test_one_value_per_cell_in_scan_order() {
        for rotation in [Rotation::Deg0, Rotation::Deg90] {
            let s = settings(
                2,
                rotation,
                ChannelMap::new(ChannelType::Prime, ChannelType::Triangular, ChannelType::Custom),
            );
            let pixels = build_grid_from(&s, Dimensions::new(7, 5), 0u64.., 100u128.., &mut rng());

            assert_eq!(pixels.len(), 12);
            for (index, pixel) in pixels.iter().enumerate() {
                assert_eq!(pixel.colour.r, index as i64);
                assert_eq!(pixel.colour.g, 100 + index as i64);
                assert_eq!(pixel.colour.b, 33);
            }
        }
    }

    #[test]
    fn test_sequence_values_reduced() {
        let s = settings(
            1,
            Rotation::Deg0,
            ChannelMap::new(ChannelType::Triangular, ChannelType::Triangular, ChannelType::Prime),
        );
        let pixels = build_grid(&s, Dimensions::new(30, 1), &mut rng());

        // 22nd triangular number is 253, 23rd is 276 -> 21.
        assert_eq!(pixels[21].colour.r, 253);
        assert_eq!(pixels[22].colour.r, 21);
        for pixel in &pixels {
            assert!((0..255).contains(&pixel.colour.g));
            assert!((0..255).contains(&pixel.colour.b));
        }
    }

    #[test]
    fn test_pixel_size_one_never_exhausts_primes() {
        let s = settings(1, Rotation::Deg0, ChannelMap::splat(ChannelType::Prime));
        let dims = Dimensions::new(40, 40);
        let pixels = build_grid(&s, dims, &mut rng());

        assert_eq!(pixels.len(), 1600);
        let expected: Vec<i64> = Primes::unbounded().take(1600).map(reduce).collect();
        let actual: Vec<i64> = pixels.iter().map(|p| p.colour.r).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_exhausted_producer_contributes_zero() {
        let s = settings(1, Rotation::Deg0, ChannelMap::splat(ChannelType::Prime));
        let primes = vec![5u64, 6].into_iter();
        let dims = Dimensions::new(4, 1);
        let pixels = build_grid_from(&s, dims, primes, Triangular::new(), &mut rng());
        let reds: Vec<i64> = pixels.iter().map(|p| p.colour.r).collect();
        assert_eq!(reds, vec![5, 6, 0, 0]);
    }

    #[test]
    fn test_random_channel_seeded() {
        let s = settings(1, Rotation::Deg0, ChannelMap::splat(ChannelType::Random));
        let a = build_grid(&s, Dimensions::new(8, 8), &mut rng());
        let b = build_grid(&s, Dimensions::new(8, 8), &mut rng());
        assert_eq!(a, b);
        for pixel in &a {
            assert_eq!(pixel.colour.r, pixel.colour.g);
            assert_eq!(pixel.colour.g, pixel.colour.b);
        }
    }

    #[test]
    fn test_empty_canvas() {
        let s = settings(3, Rotation::Deg0, ChannelMap::splat(ChannelType::Prime));
        assert!(build_grid(&s, Dimensions::new(0, 10), &mut rng()).is_empty());
        assert!(build_grid(&s, Dimensions::new(10, 0), &mut rng()).is_empty());
    }

    #[test]
    fn test_cell_count_rounds_up() {
        let s = settings(3, Rotation::Deg0, ChannelMap::splat(ChannelType::Prime));
        assert_eq!(cell_count(&s, Dimensions::new(7, 6)), 6);
        assert_eq!(cell_count(&s, Dimensions::new(0, 6)), 0);
    }
}
