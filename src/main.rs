//! Command-line interface for datagen
//!
//! # Usage Examples
//!
//! ```bash
//! # Value for a type name, string needs a size
//! datagen data string --size 16
//! datagen data ip
//!
//! # Dates: unset fields are random
//! datagen date --month 2 --day 14 --hour 9
//!
//! # Email with a synthesized domain instead of a real provider
//! datagen email --random-domain
//!
//! # Deliberately malformed IPv6 address
//! datagen ip --v6 --invalid
//!
//! # UUID v5 in the DNS namespace
//! datagen uuid 5 --namespace python.org
//!
//! # Two items out of a list, reproducible
//! datagen --seed 42 pick 2 red green blue
//! ```
//!
//! `--format json` prints the serde_json rendering of the result. Set
//! `RUST_LOG=debug` to see generator decisions.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use datagen::{
    generate_date, generate_email, generate_ipv4, generate_ipv6, generate_object,
    generate_phone_numbers, generate_random_elements, generate_string, generate_url,
    generate_uuid, random_data_named, DateRequest, EmailOptions, Protocol, DEFAULT_PHONE_LENGTH,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt::Display;

#[derive(Parser)]
#[command(name = "datagen")]
#[command(about = "Generate random test data by type")]
#[command(version)]
struct Cli {
    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Display rendering
    #[value(name = "text")]
    Text,
    /// serde_json rendering
    #[value(name = "json")]
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a value for a type name (int, float, str, bool, ip, dict, url)
    Data {
        /// Type name
        kind: String,

        /// String length, URL length or object size
        #[arg(long, default_value_t = 0)]
        size: usize,
    },

    /// Generate a string over letters, digits and punctuation
    String {
        /// Number of characters
        length: usize,
    },

    /// Generate a date, optionally with a time of day
    Date {
        /// Day of month (0 = random)
        #[arg(long, default_value_t = 0)]
        day: u32,

        /// Month (0 = random)
        #[arg(long, default_value_t = 0)]
        month: u32,

        /// Year (0 = random)
        #[arg(long, default_value_t = 0)]
        year: i32,

        #[arg(long)]
        hour: Option<u32>,

        #[arg(long)]
        minute: Option<u32>,

        #[arg(long)]
        second: Option<u32>,
    },

    /// Generate an email address
    Email {
        /// Synthesize the domain instead of using a real provider
        #[arg(long)]
        random_domain: bool,

        /// Domain override (ignored unless --random-domain is set)
        #[arg(long)]
        domain: Option<String>,

        /// Join local part and domain without `@`
        #[arg(long)]
        no_at: bool,
    },

    /// Generate an IP address
    Ip {
        /// IPv6 instead of IPv4
        #[arg(long)]
        v6: bool,

        /// Produce a malformed address
        #[arg(long)]
        invalid: bool,
    },

    /// Generate a URL of an exact length
    Url {
        /// Total length including protocol and suffix
        length: usize,

        /// http or https
        #[arg(long, default_value = "http")]
        protocol: Protocol,
    },

    /// Generate phone numbers for a country code
    Phone {
        /// Country calling code, e.g. 44
        country_code: u32,

        /// How many numbers
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Digits per number
        #[arg(long, default_value_t = DEFAULT_PHONE_LENGTH)]
        length: usize,
    },

    /// Generate a UUID
    Uuid {
        /// 1, 3, 4 or 5
        version: u8,

        /// Name hashed in the DNS namespace (versions 3 and 5)
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Pick distinct random items
    Pick {
        /// How many items
        count: usize,

        /// Items to choose from
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Generate a map of random string keys to random string values
    Object,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            tracing::debug!(seed, "Using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let format = cli.format;

    match cli.command {
        Commands::Data { kind, size } => {
            let value = random_data_named(&mut rng, &kind, size)
                .with_context(|| format!("Failed to generate '{kind}'"))?;
            emit(format, &value)?;
        }
        Commands::String { length } => {
            let value = generate_string(&mut rng, length)?;
            emit(format, &value)?;
        }
        Commands::Date {
            day,
            month,
            year,
            hour,
            minute,
            second,
        } => {
            let request = DateRequest {
                day,
                month,
                year,
                hour,
                minute,
                second,
            };
            let date = generate_date(&mut rng, &request)?;
            emit(format, &date)?;
        }
        Commands::Email {
            random_domain,
            domain,
            no_at,
        } => {
            let mut options = EmailOptions::default();
            if random_domain {
                options = options.random_domain();
            }
            if let Some(domain) = domain {
                options = options.domain(domain);
            }
            if no_at {
                options = options.without_at();
            }
            let email = generate_email(&mut rng, &options);
            emit(format, &email)?;
        }
        Commands::Ip { v6, invalid } => {
            let ip = if v6 {
                generate_ipv6(&mut rng, !invalid)
            } else {
                generate_ipv4(&mut rng, !invalid)
            };
            emit(format, &ip)?;
        }
        Commands::Url { length, protocol } => {
            let url = generate_url(&mut rng, length, protocol)
                .with_context(|| format!("Failed to generate a {length} character URL"))?;
            emit(format, &url)?;
        }
        Commands::Phone {
            country_code,
            count,
            length,
        } => {
            let numbers = generate_phone_numbers(&mut rng, country_code, count, length)?;
            match format {
                OutputFormat::Text => {
                    for number in &numbers {
                        println!("{number}");
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&numbers)?),
            }
        }
        Commands::Uuid { version, namespace } => {
            let uuid = generate_uuid(&mut rng, version, namespace.as_deref())?;
            emit(format, &uuid)?;
        }
        Commands::Pick { count, items } => {
            let picked = generate_random_elements(&mut rng, &items, count)?;
            emit(format, &picked)?;
        }
        Commands::Object => {
            let object = generate_object(&mut rng, 0)?;
            match format {
                OutputFormat::Text => println!("{}", serde_json::Value::Object(object)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&object)?),
            }
        }
    }

    Ok(())
}

fn emit<T: Display + Serialize>(format: OutputFormat, value: &T) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to serialize output")?
        ),
    }
    Ok(())
}
