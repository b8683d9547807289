//! Prime number producer.

/// Lazy prime producer using incremental trial division.
///
/// 2 is seeded directly; each odd candidate is divided only by the primes
/// up to its square root. Only those divisors are kept, not every prime
/// produced.
#[derive(Debug, Clone)]
pub struct Primes {
    /// Exclusive upper bound for odd primes, `None` for an unbounded stream.
    bound: Option<u64>,
    yielded_two: bool,
    /// Every prime up to just past the square root of the current candidate.
    divisors: Vec<u64>,
    candidate: u64,
}

impl Primes {
    /// Primes strictly less than `bound`, ascending from 2.
    ///
    /// 2 is always yielded, so a bound of 3 or less yields just `[2]`.
    pub fn below(bound: u64) -> Self {
        Self::with_bound(Some(bound))
    }

    /// Every prime, ascending from 2. Never returns `None`.
    pub fn unbounded() -> Self {
        Self::with_bound(None)
    }

    fn with_bound(bound: Option<u64>) -> Self {
        Self {
            bound,
            yielded_two: false,
            divisors: vec![2],
            candidate: 3,
        }
    }

    fn in_bounds(&self, value: u64) -> bool {
        self.bound.map_or(true, |bound| value < bound)
    }

    fn is_prime(&self, candidate: u64) -> bool {
        for &prime in &self.divisors {
            if prime * prime > candidate {
                return true;
            }
            if candidate % prime == 0 {
                return false;
            }
        }
        true
    }

    /// Grow `divisors` until it holds every prime up to `sqrt(candidate)`.
    fn cover(&mut self, candidate: u64) {
        while let Some(&last) = self.divisors.last() {
            if last * last > candidate {
                break;
            }
            let mut next = if last == 2 { 3 } else { last + 2 };
            while !self.is_prime(next) {
                next += 2;
            }
            self.divisors.push(next);
        }
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if !self.yielded_two {
            self.yielded_two = true;
            return Some(2);
        }

        loop {
            let candidate = self.candidate;
            if !self.in_bounds(candidate) {
                return None;
            }
            self.candidate += 2;

            self.cover(candidate);
            if self.is_prime(candidate) {
                return Some(candidate);
            }
        }
    }
}

/// Smallest convenient bound such that `Primes::below(bound)` yields at
/// least `count` values, never lower than `floor`.
///
/// Uses Rosser's upper bound `p_k < k(ln k + ln ln k)` for `k >= 6`.
pub fn prime_bound_for(count: u64, floor: u64) -> u64 {
    let needed = if count < 6 {
        // p_5 = 11
        12
    } else {
        let k = count as f64;
        (k * (k.ln() + k.ln().ln())).ceil() as u64 + 1
    };
    needed.max(floor)
}
