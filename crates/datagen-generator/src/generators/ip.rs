//! IP address generators.
//!
//! Invalid addresses are built from out-of-range parts so that
//! [`IpAddress::is_valid`] rejects them when re-parsing.

use datagen_core::IpAddress;
use rand::Rng;

const HEX_DIGITS: &[u8] = b"0123456789abcdef";
const NON_HEX_LETTERS: &[u8] = b"ghijklmnopqrstuvwxyz";

/// Generate an IPv4 address.
///
/// Valid addresses use octets in 0..=255. Invalid ones use values in
/// 255..=999, so at least one octet is out of range except in the single case
/// where every octet lands on 255.
pub fn generate_ipv4<R: Rng>(rng: &mut R, valid: bool) -> IpAddress {
    let range = if valid { 0..=255 } else { 255..=999 };
    let octets: Vec<String> = (0..4)
        .map(|_| rng.random_range(range.clone()).to_string())
        .collect();
    IpAddress::new(octets.join("."))
}

/// Generate an IPv6 address of eight 4-character groups.
///
/// Valid groups are lowercase hex digits; invalid groups use letters `g`..=`z`
/// which never parse as hexadecimal.
pub fn generate_ipv6<R: Rng>(rng: &mut R, valid: bool) -> IpAddress {
    let symbols = if valid { HEX_DIGITS } else { NON_HEX_LETTERS };
    let groups: Vec<String> = (0..8)
        .map(|_| {
            (0..4)
                .map(|_| symbols[rng.random_range(0..symbols.len())] as char)
                .collect()
        })
        .collect();
    IpAddress::new(groups.join(":"))
}
