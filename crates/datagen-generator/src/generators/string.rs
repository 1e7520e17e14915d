//! Random string generators.

use datagen_core::{GeneratorError, Result};
use rand::Rng;

/// Longest string the generator will produce.
pub const MAX_STRING_LENGTH: usize = 100_000;

/// ASCII letters and digits.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// ASCII letters, digits and punctuation.
pub const DEFAULT_ALPHABET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~"
);

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Generate a string of exactly `length` characters from [`DEFAULT_ALPHABET`].
pub fn generate_string<R: Rng>(rng: &mut R, length: usize) -> Result<String> {
    generate_string_from(rng, length, DEFAULT_ALPHABET)
}

/// Generate a string of exactly `length` characters sampled uniformly, with
/// replacement, from `alphabet`.
pub fn generate_string_from<R: Rng>(rng: &mut R, length: usize, alphabet: &str) -> Result<String> {
    if length > MAX_STRING_LENGTH {
        return Err(GeneratorError::LengthInvalid(format!(
            "length {length} is greater than {MAX_STRING_LENGTH}"
        )));
    }

    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() && length > 0 {
        return Err(GeneratorError::ValueInvalid(
            "alphabet must contain at least one symbol".to_string(),
        ));
    }

    Ok((0..length)
        .map(|_| symbols[rng.random_range(0..symbols.len())])
        .collect())
}

/// Generate `letters` lowercase ASCII letters followed by `digits` decimal digits.
pub fn generate_lowercase<R: Rng>(rng: &mut R, letters: usize, digits: usize) -> String {
    let mut result = String::with_capacity(letters + digits);
    for _ in 0..letters {
        result.push(LOWERCASE[rng.random_range(0..LOWERCASE.len())] as char);
    }
    for _ in 0..digits {
        result.push(DIGITS[rng.random_range(0..DIGITS.len())] as char);
    }
    result
}
