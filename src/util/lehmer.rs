//! Park-Miller "minimal standard" generator
//!
//! Computed with Schrage's decomposition so the product never overflows 32 bits.
//! Sketches are stored as (params, seed) pairs, so this exact recurrence is the
//! file format. Don't touch the constants.
use crate::errors::SketchError;
use rand::Rng;

const A: i64 = 16807;
const M: i64 = 2147483647;
const Q: i64 = 127773;
const R: i64 = 2836;

#[derive(Debug, Clone, PartialEq)]
pub struct RandomGenerator {
    seed: i64,
}

impl RandomGenerator {
    /// Fails immediately on a seed outside of `0 < seed < 2^31 - 1`.
    pub fn new(seed: i64) -> Result<RandomGenerator, SketchError> {
        if seed <= 0 || seed >= M {
            return Err(SketchError::InvalidSeed(seed));
        }
        Ok(RandomGenerator { seed })
    }

    /// Current internal state.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Next value, strictly inside (0, 1).
    pub fn next_double(&mut self) -> f64 {
        let hi = self.seed / Q;
        let lo = self.seed % Q;
        self.seed = A * lo - R * hi;
        if self.seed <= 0 {
            self.seed += M;
        }
        self.seed as f64 / M as f64
    }

    /// Box-Muller. Always two draws.
    pub fn random_normal(&mut self) -> f64 {
        let mut u = 0.0;
        let mut v = 0.0;
        while u == 0.0 {
            u = self.next_double();
        }
        while v == 0.0 {
            v = self.next_double();
        }
        (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos()
    }

    /// NOT uniform. Rounding piles up probability on the inner values, and old
    /// sketches depend on it.
    pub fn next_int(&mut self, min: f64, max: f64) -> f64 {
        let range = round_half_up(max) - round_half_up(min);
        min + round_half_up(range * self.next_double())
    }
}

/// Rounds .5 toward positive infinity, unlike [`f64::round`].
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Picks a fresh seed for a redraw. Not part of the deterministic stream.
pub fn random_seed() -> i64 {
    rand::thread_rng().gen_range(1..M)
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_values_seed_1() {
        // 16807^n mod (2^31 - 1), the textbook check values
        let mut rng = RandomGenerator::new(1).unwrap();
        rng.next_double();
        assert_eq!(rng.seed(), 16807);
        rng.next_double();
        assert_eq!(rng.seed(), 282475249);
        rng.next_double();
        assert_eq!(rng.seed(), 1622650073);
    }

    #[test]
    fn test_ten_thousandth_value() {
        // Park & Miller's published check: seed 1, 10000 draws.
        let mut rng = RandomGenerator::new(1).unwrap();
        for _ in 0..10000 {
            rng.next_double();
        }
        assert_eq!(rng.seed(), 1043618065);
    }

    #[test]
    fn test_invalid_seeds() {
        assert_eq!(RandomGenerator::new(0), Err(SketchError::InvalidSeed(0)));
        assert_eq!(RandomGenerator::new(-5), Err(SketchError::InvalidSeed(-5)));
        assert_eq!(
            RandomGenerator::new(2147483647),
            Err(SketchError::InvalidSeed(2147483647))
        );
        assert!(RandomGenerator::new(2147483646).is_ok());
    }

    #[test]
    fn test_normal_uses_two_draws() {
        let mut a = RandomGenerator::new(1234).unwrap();
        let mut b = RandomGenerator::new(1234).unwrap();
        a.random_normal();
        b.next_double();
        b.next_double();
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn test_normal_formula() {
        let mut a = RandomGenerator::new(42).unwrap();
        let mut b = RandomGenerator::new(42).unwrap();
        let u = b.next_double();
        let v = b.next_double();
        let expected = (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos();
        assert_eq!(a.random_normal(), expected);
    }

    #[test]
    fn test_next_int_formula() {
        let mut a = RandomGenerator::new(99).unwrap();
        let mut b = RandomGenerator::new(99).unwrap();
        for _ in 0..100 {
            let got = a.next_int(0.0, 1.0);
            let expected = round_half_up(b.next_double());
            assert_eq!(got, expected);
            assert!(got == 0.0 || got == 1.0);
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }

    #[test]
    fn test_random_seed_valid() {
        for _ in 0..100 {
            assert!(RandomGenerator::new(random_seed()).is_ok());
        }
    }

    proptest! {
        #[test]
        fn same_seed_same_sequence(seed in 1i64..2147483647) {
            let mut a = RandomGenerator::new(seed).unwrap();
            let mut b = RandomGenerator::new(seed).unwrap();
            for _ in 0..200 {
                prop_assert_eq!(a.next_double(), b.next_double());
            }
        }

        #[test]
        fn next_double_in_open_unit_interval(seed in 1i64..2147483647) {
            let mut rng = RandomGenerator::new(seed).unwrap();
            for _ in 0..200 {
                let v = rng.next_double();
                prop_assert!(v > 0.0 && v < 1.0);
            }
        }
    }
}
