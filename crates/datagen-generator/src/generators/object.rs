//! JSON-like object generator.

use super::string::generate_string;
use datagen_core::Result;
use rand::Rng;
use serde_json::{Map, Value};

/// Entries in every generated object.
pub const OBJECT_ENTRIES: usize = 10;

/// Length of every generated key and value.
pub const OBJECT_STRING_LENGTH: usize = 10;

/// Generate an object mapping random string keys to random string values.
///
/// A key collision keeps the later value.
// TODO: use `count` as the number of entries; every caller currently gets
// OBJECT_ENTRIES regardless of what it asks for.
pub fn generate_object<R: Rng>(rng: &mut R, count: usize) -> Result<Map<String, Value>> {
    let _ = count;

    let mut object = Map::new();
    for _ in 0..OBJECT_ENTRIES {
        let key = generate_string(rng, OBJECT_STRING_LENGTH)?;
        let value = generate_string(rng, OBJECT_STRING_LENGTH)?;
        object.insert(key, Value::String(value));
    }
    Ok(object)
}
