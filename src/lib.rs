//! datagen Library
//!
//! Type-directed synthetic test data: random strings, numbers, dates,
//! emails, IP addresses, URLs, phone numbers, UUIDs and random subsets, plus
//! a dispatcher that produces a value from a type descriptor and an
//! auto-fill helper that builds a call's arguments from its parameter types.
//!
//! # Crates
//!
//! - `datagen_core` - Error taxonomy, type descriptors and value types
//! - `datagen_generator` - Generators, dispatcher and auto-fill
//!
//! This crate re-exports both so callers depend on one name.
//!
//! # CLI Usage
//!
//! ```bash
//! # A 20 character URL, reproducible
//! datagen --seed 7 url 20 --protocol https
//!
//! # Three UK phone numbers as JSON
//! datagen --format json phone 44 --count 3
//!
//! # Any supported kind through the dispatcher
//! datagen data string --size 12
//! ```

pub use datagen_core::{
    DataKind, ErrorKind, GeneratedDate, GeneratedEmail, GeneratedValue, GeneratorError, IpAddress,
    IpKind, PhoneNumber, Protocol, RandomElements, Result, Url,
};
pub use datagen_generator::{
    fill_and_call, fill_params, fill_randomly, generate_bool, generate_date, generate_email,
    generate_float, generate_for_kind, generate_int, generate_ipv4, generate_ipv6,
    generate_object, generate_phone_numbers, generate_random_elements, generate_string,
    generate_string_from, generate_url, generate_uuid, random_data, random_data_named,
    DateRequest, EmailOptions, FillArg, FillFn, Param, Signature, DEFAULT_PHONE_LENGTH,
    DEFAULT_STRING_LENGTH, DEFAULT_URL_LENGTH, MAX_STRING_LENGTH,
};

pub use datagen_core as core;
pub use datagen_generator as generator;
