//! Numeric value generators.

use rand::Rng;

/// Lower bound for generated integers.
pub const INT_MIN: i64 = -100;

/// Upper bound for generated integers.
pub const INT_MAX: i64 = 100;

/// Generate a random integer in [`INT_MIN`, `INT_MAX`].
pub fn generate_int<R: Rng>(rng: &mut R) -> i64 {
    rng.random_range(INT_MIN..=INT_MAX)
}

/// Generate a random float: an integer in [`INT_MIN`, `INT_MAX`] plus a
/// two-digit fraction in [0.10, 0.99].
pub fn generate_float<R: Rng>(rng: &mut R) -> f64 {
    let whole = generate_int(rng);
    let hundredths: i64 = rng.random_range(10..=99);
    whole as f64 + hundredths as f64 / 100.0
}

/// Generate a random boolean.
pub fn generate_bool<R: Rng>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}
