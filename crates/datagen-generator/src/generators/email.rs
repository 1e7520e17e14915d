//! Email address generator.

use super::string::generate_lowercase;
use datagen_core::GeneratedEmail;
use rand::Rng;

/// Domains used when a real-looking domain is requested.
pub const REAL_DOMAINS: [&str; 3] = ["gmail.com", "outlook.com", "yahoo.com"];

/// Options for [`generate_email`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailOptions {
    /// Pick the domain from [`REAL_DOMAINS`]. Takes precedence over `domain`.
    pub real_domain: bool,

    /// Domain override
    pub domain: Option<String>,

    /// Join local part and domain with `@`
    pub use_at: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            real_domain: true,
            domain: None,
            use_at: true,
        }
    }
}

impl EmailOptions {
    /// Synthesize a random `label.tld` domain instead of a real one.
    pub fn random_domain(mut self) -> Self {
        self.real_domain = false;
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn without_at(mut self) -> Self {
        self.use_at = false;
        self
    }
}

/// Generate an email address.
///
/// The local part is always 8 lowercase letters followed by 4 digits.
///
/// Domain selection:
/// - an override containing `.` is used as is
/// - an override without `.` gets a leading `.` when `use_at` is false, and is
///   used as is otherwise
/// - without an override a `xxxxxx.xxx` domain is synthesized
/// - `real_domain` replaces whatever was chosen above with a
///   [`REAL_DOMAINS`] entry, so an override is ignored in that mode
pub fn generate_email<R: Rng>(rng: &mut R, options: &EmailOptions) -> GeneratedEmail {
    let local_part = generate_lowercase(rng, 8, 4);

    let override_domain = options.domain.as_deref().filter(|d| !d.is_empty());
    let mut domain = match override_domain {
        Some(d) if d.contains('.') => d.to_string(),
        Some(d) if !options.use_at => format!(".{d}"),
        Some(d) => d.to_string(),
        None => format!(
            "{}.{}",
            generate_lowercase(rng, 6, 0),
            generate_lowercase(rng, 3, 0)
        ),
    };

    if options.real_domain {
        domain = REAL_DOMAINS[rng.random_range(0..REAL_DOMAINS.len())].to_string();
    }

    GeneratedEmail::new(local_part, domain, options.use_at)
}
