//! Channel composition.
//!
//! Maps a channel type to one of the candidate values drawn for a cell.

use rand::Rng;

use crate::types::{ChannelMap, ChannelType, Rgb};

/// Sequence values are reduced modulo this before display.
pub const CHANNEL_MODULUS: u64 = 255;

/// The values a single channel can choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateValues {
    pub prime: i64,
    pub triangular: i64,
    pub random: i64,
    pub custom: i64,
}

/// Reduce a raw sequence value into 0..=254.
pub fn reduce<V: Into<u128>>(value: V) -> i64 {
    (value.into() % u128::from(CHANNEL_MODULUS)) as i64
}

/// A uniform draw from 0..255.
pub fn random_channel<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(0..CHANNEL_MODULUS as i64)
}

/// Select the candidate matching `ty`.
pub fn compose_channel(ty: ChannelType, values: &CandidateValues) -> i64 {
    match ty {
        ChannelType::Prime => values.prime,
        ChannelType::Triangular => values.triangular,
        ChannelType::Random => values.random,
        ChannelType::Custom => values.custom,
    }
}

/// Compose all three channels from one cell's draws.
///
/// `prime`, `triangular` and `random` are already reduced; custom values
/// come from `custom_values` unchanged.
pub fn compose_pixel(
    channel_types: &ChannelMap<ChannelType>,
    custom_values: &ChannelMap<i64>,
    prime: i64,
    triangular: i64,
    random: i64,
) -> Rgb {
    let channels = channel_types.map(|channel, ty| {
        let values = CandidateValues {
            prime,
            triangular,
            random,
            custom: *custom_values.get(channel),
        };
        compose_channel(ty, &values)
    });

    Rgb::new(channels.red, channels.green, channels.blue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VALUES: CandidateValues = CandidateValues {
        prime: 7,
        triangular: 10,
        random: 3,
        custom: 9,
    };

    #[test]
    fn test_compose_channel_each_type() {
        assert_eq!(compose_channel(ChannelType::Prime, &VALUES), 7);
        assert_eq!(compose_channel(ChannelType::Triangular, &VALUES), 10);
        assert_eq!(compose_channel(ChannelType::Random, &VALUES), 3);
        assert_eq!(compose_channel(ChannelType::Custom, &VALUES), 9);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(0u64), 0);
        assert_eq!(reduce(254u64), 254);
        assert_eq!(reduce(255u64), 0);
        assert_eq!(reduce(257u128), 2);
        assert_eq!(reduce(u64::MAX), (u64::MAX % 255) as i64);
        assert_eq!(reduce(u128::MAX), (u128::MAX % 255) as i64);
    }

    #[test]
    fn test_random_channel_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let value = random_channel(&mut rng);
            assert!((0..255).contains(&value));
        }
    }

    #[test]
    fn test_compose_pixel_mixed() {
        let types = ChannelMap::new(ChannelType::Prime, ChannelType::Custom, ChannelType::Random);
        let customs = ChannelMap::new(1, 200, 3);
        let rgb = compose_pixel(&types, &customs, 5, 6, 42);
        assert_eq!(rgb, Rgb::new(5, 200, 42));
    }

    #[test]
    fn test_compose_pixel_custom_unclamped() {
        let types = ChannelMap::splat(ChannelType::Custom);
        let customs = ChannelMap::new(-1, 255, 1000);
        let rgb = compose_pixel(&types, &customs, 0, 0, 0);
        assert_eq!(rgb.to_string(), "rgb(-1, 255, 1000)");
    }
}
