//! Individual value generators and the type dispatcher.
//!
//! Each submodule owns one kind of value and its validation rules.
//! [`random_data`] maps a [`DataKind`] to the right generator.

pub mod date;
pub mod elements;
pub mod email;
pub mod ip;
pub mod numeric;
pub mod object;
pub mod phone;
pub mod string;
pub mod url;
pub mod uuid;

use datagen_core::{DataKind, GeneratedValue, GeneratorError, Protocol, Result};
use rand::Rng;
use tracing::debug;

/// Generate a value of the given kind.
///
/// `size_hint` is the string length for [`DataKind::Str`], the total length
/// for [`DataKind::Url`] and the entry count for [`DataKind::Object`]; other
/// kinds ignore it.
pub fn random_data<R: Rng>(
    rng: &mut R,
    kind: DataKind,
    size_hint: usize,
) -> Result<GeneratedValue> {
    debug!(%kind, size_hint, "Generating random data");

    match kind {
        DataKind::Int => Ok(GeneratedValue::Int(numeric::generate_int(rng))),

        DataKind::Float => Ok(GeneratedValue::Float(numeric::generate_float(rng))),

        DataKind::Str => {
            if size_hint == 0 {
                return Err(GeneratorError::LengthNotProvided(
                    "a string needs a length greater than 0".to_string(),
                ));
            }
            string::generate_string(rng, size_hint).map(GeneratedValue::String)
        }

        DataKind::Bool => Ok(GeneratedValue::Bool(numeric::generate_bool(rng))),

        // Always a valid IPv4 address
        DataKind::Ip => Ok(GeneratedValue::Ip(ip::generate_ipv4(rng, true))),

        DataKind::Object => object::generate_object(rng, size_hint).map(GeneratedValue::Object),

        DataKind::Url => url::generate_url(rng, size_hint, Protocol::Http).map(GeneratedValue::Url),

        DataKind::List | DataKind::Tuple | DataKind::Set => Err(GeneratorError::TypeUnknown(
            format!("data type '{kind}' is not supported"),
        )),
    }
}

/// Parse `name` as a [`DataKind`] and generate a value for it.
pub fn random_data_named<R: Rng>(
    rng: &mut R,
    name: &str,
    size_hint: usize,
) -> Result<GeneratedValue> {
    let kind: DataKind = name.parse()?;
    random_data(rng, kind, size_hint)
}
