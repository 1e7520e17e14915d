//! URL generator with an exact total length.

use super::string::{generate_string_from, ALPHANUMERIC};
use datagen_core::{GeneratorError, Protocol, Result, Url};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Domain suffixes a generated URL can end with.
pub const URL_SUFFIXES: [&str; 12] = [
    ".com", ".net", ".org", ".info", ".biz", ".ua", ".de", ".fr", ".it", ".es", ".pl", ".git",
];

/// Shortest length that can hold a URL for `protocol`.
pub fn min_url_length(protocol: Protocol) -> usize {
    let shortest = URL_SUFFIXES.iter().map(|s| s.len()).min().unwrap_or(0);
    protocol.prefix().len() + shortest
}

/// Generate a URL whose rendering is exactly `length` characters.
///
/// The suffix is drawn from the entries of [`URL_SUFFIXES`] that fit after the
/// `protocol://` prefix; the address fills the remaining characters with
/// ASCII letters and digits.
pub fn generate_url<R: Rng>(rng: &mut R, length: usize, protocol: Protocol) -> Result<Url> {
    let too_short = || {
        GeneratorError::ValueInvalid(format!(
            "length {length} is too short for url (minimum is {})",
            min_url_length(protocol)
        ))
    };

    let available = length
        .checked_sub(protocol.prefix().len())
        .ok_or_else(too_short)?;

    let fitting: Vec<&str> = URL_SUFFIXES
        .iter()
        .copied()
        .filter(|suffix| suffix.len() <= available)
        .collect();
    let suffix = *fitting.choose(rng).ok_or_else(too_short)?;

    let address = generate_string_from(rng, available - suffix.len(), ALPHANUMERIC)?;
    Ok(Url::new(protocol, address, suffix))
}
