//! Format catalogue and format hints
//!
//! Each assignable type has a fixed list of legal `format` values. `none`
//! is always legal and means "no format".

use crate::schema::JsonType;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

/// Sentinel meaning "no format"
pub const NO_FORMAT: &str = "none";

const STRING_FORMATS: &[&str] = &[
    "none",
    "date",
    "time",
    "date-time",
    "email",
    "hostname",
    "ipv4",
    "ipv6",
    "uri",
    "uuid",
];
const NUMBER_FORMATS: &[&str] = &["none", "float", "double"];
const INTEGER_FORMATS: &[&str] = &["none", "int32", "int64"];
const NONE_ONLY: &[&str] = &["none"];

/// ISO 8601 date-time: 2024-01-15T10:30:00Z, 2024-01-15 10:30:00+02:00
static DATETIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:?\d{2})?$").unwrap()
});

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:?\d{2})?$").unwrap()
});

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

static URI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://\S+$").unwrap());

/// Legal formats for a field of the given type, `none` first
pub fn formats_for(json_type: JsonType) -> &'static [&'static str] {
    match json_type {
        JsonType::String => STRING_FORMATS,
        JsonType::Number => NUMBER_FORMATS,
        JsonType::Integer => INTEGER_FORMATS,
        JsonType::Boolean | JsonType::Object | JsonType::Array | JsonType::Null => NONE_ONLY,
    }
}

/// Whether `format` may be set on a field of the given type
pub fn is_valid_format(json_type: JsonType, format: &str) -> bool {
    formats_for(json_type).contains(&format)
}

/// Suggest a string format for a sample value
///
/// `hostname` is never suggested: almost any word matches it.
pub fn suggest_format(s: &str) -> Option<&'static str> {
    if DATETIME_REGEX.is_match(s) {
        Some("date-time")
    } else if DATE_REGEX.is_match(s) {
        Some("date")
    } else if TIME_REGEX.is_match(s) {
        Some("time")
    } else if UUID_REGEX.is_match(s) {
        Some("uuid")
    } else if s.parse::<Ipv4Addr>().is_ok() {
        Some("ipv4")
    } else if s.parse::<Ipv6Addr>().is_ok() {
        Some("ipv6")
    } else if URI_REGEX.is_match(s) {
        Some("uri")
    } else if EMAIL_REGEX.is_match(s) {
        Some("email")
    } else {
        None
    }
}
