//! Random value generators for the datagen engine.
//!
//! Every generator takes the random source explicitly, so the same code works
//! with the thread-local generator (`rand::rng()`) and with a seeded
//! `StdRng` for reproducible fixtures.
//!
//! # Architecture
//!
//! ```text
//!   fill_randomly / fill_and_call      (auto-fill from parameter types)
//!              │
//!              ▼
//!        random_data(kind)             (type dispatcher)
//!              │
//!              ▼
//!   generators::{string, numeric, ip, object, url, ...}
//!              │
//!              ▼
//!   datagen_core values (GeneratedValue, Url, IpAddress, ...)
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen_core::{DataKind, Protocol, Url};
//! use datagen_generator::{fill_randomly, random_data};
//! use datagen_generator::generators::url::generate_url;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let url = generate_url(&mut rng, 15, Protocol::Http).unwrap();
//! assert_eq!(url.to_string().len(), 15);
//!
//! let value = random_data(&mut rng, DataKind::Int, 0).unwrap();
//! assert!(value.as_i64().is_some());
//!
//! let total = fill_randomly(&mut rng, |name: String, site: Url| {
//!     name.len() + site.len()
//! })
//! .unwrap();
//! assert_eq!(total, 25);
//! ```
//!
//! # Generators
//!
//! - `string` - Strings over a configurable alphabet (max 100 000 chars)
//! - `numeric` - Integers and two-digit floats in [-100, 100], booleans
//! - `date` - Dates with optional time of day
//! - `email` - Email addresses with real or synthesized domains
//! - `ip` - Valid or deliberately invalid IPv4/IPv6 addresses
//! - `url` - URLs of an exact length
//! - `phone` - Phone numbers for a country code
//! - `uuid` - UUID versions 1, 3, 4 and 5
//! - `elements` - Random subsets of a collection
//! - `object` - JSON-like string maps

pub mod fill;
pub mod generators;

// Re-exports for convenience
pub use fill::{
    fill_and_call, fill_params, fill_randomly, generate_for_kind, FillArg, FillFn, Param,
    Signature, DEFAULT_STRING_LENGTH, DEFAULT_URL_LENGTH,
};
pub use generators::date::{generate_date, DateRequest};
pub use generators::elements::generate_random_elements;
pub use generators::email::{generate_email, EmailOptions};
pub use generators::ip::{generate_ipv4, generate_ipv6};
pub use generators::numeric::{generate_bool, generate_float, generate_int};
pub use generators::object::generate_object;
pub use generators::phone::{generate_phone_numbers, DEFAULT_PHONE_LENGTH};
pub use generators::string::{generate_string, generate_string_from, MAX_STRING_LENGTH};
pub use generators::url::generate_url;
pub use generators::uuid::generate_uuid;
pub use generators::{random_data, random_data_named};
