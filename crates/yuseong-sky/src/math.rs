//! Stateless numeric helpers for element generation.

use rand::Rng;

/// Uniform random float in `[min, max)`.
///
/// A degenerate range (`max <= min`) returns `min` rather than panicking.
pub fn uniform(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    if max > min { rng.random_range(min..max) } else { min }
}

/// Uniform random integer in `[min, max]` inclusive.
pub fn uniform_int(rng: &mut impl Rng, min: i64, max: i64) -> i64 {
    if max > min { rng.random_range(min..=max) } else { min }
}

/// Convert degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn uniform_stays_inside_the_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = uniform(&mut rng, -10.0, 80.0);
            assert!((-10.0..80.0).contains(&v));
        }
    }

    #[test]
    fn uniform_degenerate_range_returns_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(uniform(&mut rng, 3.0, 3.0), 3.0);
        assert_eq!(uniform(&mut rng, 5.0, 2.0), 5.0);
    }

    #[test]
    fn uniform_int_is_inclusive() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = uniform_int(&mut rng, 1, 3);
            assert!((1..=3).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn degree_conversion() {
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((to_radians(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(to_radians(0.0), 0.0);
    }
}
