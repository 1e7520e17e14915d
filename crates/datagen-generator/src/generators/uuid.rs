//! UUID value generator.

use datagen_core::{GeneratorError, Result};
use rand::Rng;
use uuid::{Builder, Uuid};

/// Generate a UUID of the given version.
///
/// - `1`: current time with a random node id
/// - `3` / `5`: MD5 / SHA-1 hash of the DNS namespace and `namespace`
///   (deterministic, `namespace` is required)
/// - `4`: random
pub fn generate_uuid<R: Rng>(rng: &mut R, version: u8, namespace: Option<&str>) -> Result<Uuid> {
    match version {
        1 => {
            let mut node_id = [0u8; 6];
            rng.fill(&mut node_id);
            Ok(Uuid::now_v1(&node_id))
        }
        3 | 5 => {
            let name = namespace
                .filter(|name| !name.is_empty())
                .ok_or(GeneratorError::UuidNamespaceMissing(version))?;
            Ok(if version == 3 {
                Uuid::new_v3(&Uuid::NAMESPACE_DNS, name.as_bytes())
            } else {
                Uuid::new_v5(&Uuid::NAMESPACE_DNS, name.as_bytes())
            })
        }
        4 => Ok(generate_uuid_v4(rng)),
        _ => Err(GeneratorError::UuidVersionInvalid(version)),
    }
}

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}
