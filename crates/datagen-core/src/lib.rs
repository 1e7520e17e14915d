//! Core types for the datagen synthetic data engine.
//!
//! This crate holds the data that flows through the generators, with no
//! randomness of its own:
//!
//! - [`GeneratorError`] - The error taxonomy shared by every generator
//! - [`DataKind`] - Logical type descriptor used for dispatch
//! - [`GeneratedValue`] - Output of the type dispatcher
//! - Domain values: [`GeneratedDate`], [`GeneratedEmail`], [`IpAddress`],
//!   [`Url`], [`PhoneNumber`], [`RandomElements`]
//!
//! # Architecture
//!
//! ```text
//! datagen-core (this crate)
//!    │
//!    └─── datagen-generator  (generators, dispatcher, auto-fill)
//!              │
//!              └─── datagen  (facade + CLI)
//! ```

pub mod error;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use error::{ErrorKind, GeneratorError, Result};
pub use types::DataKind;
pub use values::{
    GeneratedDate, GeneratedEmail, GeneratedValue, IpAddress, IpKind, PhoneNumber, Protocol,
    RandomElements, Url,
};
