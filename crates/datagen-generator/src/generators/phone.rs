//! Phone number generator.

use datagen_core::{GeneratorError, PhoneNumber, Result};
use rand::Rng;

/// Digits per number when the caller has no preference.
pub const DEFAULT_PHONE_LENGTH: usize = 10;

/// Generate `count` phone numbers of `phone_length` digits for `country_code`.
pub fn generate_phone_numbers<R: Rng>(
    rng: &mut R,
    country_code: u32,
    count: usize,
    phone_length: usize,
) -> Result<Vec<PhoneNumber>> {
    if country_code == 0 {
        return Err(GeneratorError::ValueInvalid(
            "country code must be a positive integer".to_string(),
        ));
    }
    if count == 0 {
        return Err(GeneratorError::ValueInvalid(
            "number count must be a positive integer".to_string(),
        ));
    }
    if phone_length == 0 {
        return Err(GeneratorError::ValueInvalid(
            "phone length must be a positive integer".to_string(),
        ));
    }

    Ok((0..count)
        .map(|_| {
            let number: String = (0..phone_length)
                .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
                .collect();
            PhoneNumber::new(country_code, number)
        })
        .collect())
}
