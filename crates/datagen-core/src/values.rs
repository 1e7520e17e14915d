//! Value representations produced by the generators.
//!
//! Every generator returns one of these types. They are plain immutable data:
//! the generator builds them once and hands ownership to the caller. Each type
//! renders its canonical string form through `Display`.

use crate::error::GeneratorError;
use crate::types::DataKind;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Value returned by the type dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    /// Integer value
    Int(i64),

    /// Floating point value
    Float(f64),

    /// String value
    String(String),

    /// Boolean value
    Bool(bool),

    /// IP address
    Ip(IpAddress),

    /// JSON-like object
    Object(Map<String, Value>),

    /// URL
    Url(Url),
}

impl GeneratedValue {
    /// The logical kind this value was generated for.
    pub fn kind(&self) -> DataKind {
        match self {
            Self::Int(_) => DataKind::Int,
            Self::Float(_) => DataKind::Float,
            Self::String(_) => DataKind::Str,
            Self::Bool(_) => DataKind::Bool,
            Self::Ip(_) => DataKind::Ip,
            Self::Object(_) => DataKind::Object,
            Self::Url(_) => DataKind::Url,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an IP address.
    pub fn as_ip(&self) -> Option<&IpAddress> {
        match self {
            Self::Ip(ip) => Some(ip),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Try to get this value as a URL.
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Self::Url(url) => Some(url),
            _ => None,
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Ip(ip) => write!(f, "{ip}"),
            Self::Object(obj) => write!(f, "{}", Value::Object(obj.clone())),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

// ============================================================================
// Date
// ============================================================================

/// Generated calendar date with an optional time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneratedDate {
    /// Calendar date
    pub date: NaiveDate,

    /// Time of day, present when any time component was requested
    pub time: Option<NaiveTime>,
}

impl GeneratedDate {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        Self { date, time }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Hour, minute and second when a time of day is present.
    pub fn hms(&self) -> Option<(u32, u32, u32)> {
        self.time.map(|t| (t.hour(), t.minute(), t.second()))
    }
}

impl fmt::Display for GeneratedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time {
            Some(time) => write!(
                f,
                "{}T{}",
                self.date.format("%Y-%m-%d"),
                time.format("%H:%M:%S")
            ),
            None => write!(f, "{}", self.date.format("%Y-%m-%d")),
        }
    }
}

// ============================================================================
// Email
// ============================================================================

/// Generated email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedEmail {
    /// Lowercase letters followed by digits
    pub local_part: String,

    /// Domain part (may start with `.` when rendered without `@`)
    pub domain: String,

    /// Whether the rendering joins the parts with `@`
    pub use_at: bool,
}

impl GeneratedEmail {
    pub fn new(local_part: impl Into<String>, domain: impl Into<String>, use_at: bool) -> Self {
        Self {
            local_part: local_part.into(),
            domain: domain.into(),
            use_at,
        }
    }

    /// Full rendered address.
    pub fn address(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeneratedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.use_at {
            write!(f, "{}@{}", self.local_part, self.domain)
        } else {
            write!(f, "{}{}", self.local_part, self.domain)
        }
    }
}

// ============================================================================
// IP address
// ============================================================================

/// IP address family, inferred from the textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IpKind {
    V4,
    V6,
}

/// Textual IP address.
///
/// Validity is not stored; [`IpAddress::is_valid`] re-parses the text every
/// time, so an address built from an arbitrary string can be checked too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IpAddress {
    address: String,
    kind: IpKind,
}

impl IpAddress {
    /// Wrap an address string. A `.` anywhere means IPv4, otherwise IPv6.
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        let kind = if address.contains('.') {
            IpKind::V4
        } else {
            IpKind::V6
        };
        Self { address, kind }
    }

    pub fn kind(&self) -> IpKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Check the address: four decimal octets in 0..=255 for IPv4, eight
    /// hexadecimal groups in 0..=0xffff for IPv6.
    pub fn is_valid(&self) -> bool {
        match self.kind {
            IpKind::V4 => {
                let octets: Vec<&str> = self.address.split('.').collect();
                octets.len() == 4
                    && octets
                        .iter()
                        .all(|o| o.parse::<u32>().is_ok_and(|v| v <= 255))
            }
            IpKind::V6 => {
                let groups: Vec<&str> = self.address.split(':').collect();
                groups.len() == 8
                    && groups
                        .iter()
                        .all(|g| u32::from_str_radix(g, 16).is_ok_and(|v| v <= 0xffff))
            }
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

// ============================================================================
// URL
// ============================================================================

/// URL scheme accepted by the URL generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Scheme followed by `://`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Http => "http://",
            Self::Https => "https://",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(GeneratorError::value(format!(
                "protocol must be http or https, got '{s}'"
            ))),
        }
    }
}

/// Generated URL: `protocol://` + address + suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Url {
    /// Scheme
    pub protocol: Protocol,

    /// Random alphanumeric slug
    pub address: String,

    /// Top-level domain suffix including the leading dot
    pub suffix: String,
}

impl Url {
    pub fn new(protocol: Protocol, address: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            protocol,
            address: address.into(),
            suffix: suffix.into(),
        }
    }

    pub fn full_address(&self) -> String {
        self.to_string()
    }

    /// Length of the rendered URL.
    pub fn len(&self) -> usize {
        self.protocol.prefix().len() + self.address.len() + self.suffix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.protocol.prefix(), self.address, self.suffix)
    }
}

// ============================================================================
// Phone number
// ============================================================================

/// Phone number with a country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneNumber {
    /// Country calling code
    pub country_code: u32,

    /// Decimal digits without the country code
    pub number: String,
}

impl PhoneNumber {
    pub fn new(country_code: u32, number: impl Into<String>) -> Self {
        Self {
            country_code,
            number: number.into(),
        }
    }

    /// `+` followed by the country code and the digits.
    pub fn full_number(&self) -> String {
        format!("+{}{}", self.country_code, self.number)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}{}", self.country_code, self.number)
    }
}

// ============================================================================
// Random elements
// ============================================================================

/// Elements picked from a source collection, in sampling order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomElements<T> {
    pub elements: Vec<T>,
}

impl<T> RandomElements<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.elements
    }
}

impl<T: fmt::Display> fmt::Display for RandomElements<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T> IntoIterator for RandomElements<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_value_accessors() {
        assert_eq!(GeneratedValue::Int(42).as_i64(), Some(42));
        assert_eq!(GeneratedValue::Float(3.25).as_f64(), Some(3.25));
        assert_eq!(GeneratedValue::Bool(true).as_bool(), Some(true));
        assert_eq!(
            GeneratedValue::String("test".to_string()).as_str(),
            Some("test")
        );
        assert_eq!(GeneratedValue::Bool(true).as_i64(), None);
        assert_eq!(GeneratedValue::Int(1).kind(), DataKind::Int);
    }

    #[test]
    fn test_ip_kind_inferred_from_separator() {
        assert_eq!(IpAddress::new("10.0.0.1").kind(), IpKind::V4);
        assert_eq!(IpAddress::new("fe80:0:0:0:0:0:0:1").kind(), IpKind::V6);
    }

    #[test]
    fn test_ipv4_validity() {
        assert!(IpAddress::new("0.0.0.0").is_valid());
        assert!(IpAddress::new("255.255.255.255").is_valid());
        assert!(!IpAddress::new("256.1.1.1").is_valid());
        assert!(!IpAddress::new("1.2.3").is_valid());
        assert!(!IpAddress::new("a.b.c.d").is_valid());
    }

    #[test]
    fn test_ipv6_validity() {
        assert!(IpAddress::new("ffff:0000:abcd:1234:5678:9abc:def0:0001").is_valid());
        assert!(!IpAddress::new("ghij:0000:abcd:1234:5678:9abc:def0:0001").is_valid());
        assert!(!IpAddress::new("fffff:0:0:0:0:0:0:0").is_valid());
        assert!(!IpAddress::new("::1").is_valid());
    }

    #[test]
    fn test_url_rendering() {
        let url = Url::new(Protocol::Https, "abc", ".com");
        assert_eq!(url.to_string(), "https://abc.com");
        assert_eq!(url.len(), 15);
    }

    #[test]
    fn test_protocol_parse() {
        assert_eq!("http".parse::<Protocol>().unwrap(), Protocol::Http);
        assert_eq!("https".parse::<Protocol>().unwrap(), Protocol::Https);
        assert!(matches!(
            "ftp".parse::<Protocol>(),
            Err(GeneratorError::ValueInvalid(_))
        ));
    }

    #[test]
    fn test_phone_number_rendering() {
        let phone = PhoneNumber::new(44, "12345678");
        assert_eq!(phone.full_number(), "+4412345678");
        assert_eq!(phone.to_string(), phone.full_number());
    }

    #[test]
    fn test_email_rendering() {
        assert_eq!(
            GeneratedEmail::new("abc1", "mail.com", true).to_string(),
            "abc1@mail.com"
        );
        assert_eq!(
            GeneratedEmail::new("abc1", ".mail", false).to_string(),
            "abc1.mail"
        );
    }

    #[test]
    fn test_date_rendering() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 7).unwrap();
        assert_eq!(GeneratedDate::new(date, None).to_string(), "2021-03-07");

        let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        let generated = GeneratedDate::new(date, Some(time));
        assert_eq!(generated.to_string(), "2021-03-07T09:05:00");
        assert_eq!(generated.hms(), Some((9, 5, 0)));
    }

    #[test]
    fn test_random_elements_rendering() {
        let elements = RandomElements::new(vec![3, 1, 2]);
        assert_eq!(elements.to_string(), "[3, 1, 2]");
        assert_eq!(elements.len(), 3);
    }
}
