//! Dot-numeric version tuples
//!
//! Package versions on the comparison tables look like `2.14` or `2.31.1`.
//! Only runs of ASCII digits separated by dots are accepted; anything else
//! is rejected by [`parse_version`] and must be screened with
//! [`looks_numeric`] first.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Prefix sniff: digits, a dot, a digit, then anything
static NUMERIC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]").expect("valid numeric prefix pattern"));

/// Error returned when a string is not a dot-separated list of integers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid version '{input}': {reason}")]
pub struct VersionParseError {
    /// The offending input
    pub input: String,
    /// What was wrong with it
    pub reason: String,
}

impl VersionParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// An ordered sequence of non-negative integers, e.g. `2.14` -> `(2, 14)`
///
/// Ordering is plain lexicographic tuple ordering: a strict prefix sorts
/// before the longer tuple, so `2.14 < 2.14.0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTuple(Vec<u64>);

impl VersionTuple {
    /// Create a tuple from its components
    pub fn new(parts: Vec<u64>) -> Self {
        Self(parts)
    }

    /// The numeric components
    pub fn parts(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(u64::to_string).collect();
        write!(f, "{}", joined.join("."))
    }
}

impl FromStr for VersionTuple {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl Serialize for VersionTuple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a dot-separated numeric version string
///
/// Every segment must be a non-empty run of ASCII digits.
pub fn parse_version(s: &str) -> Result<VersionTuple, VersionParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(VersionParseError::new(s, "empty version string"));
    }

    trimmed
        .split('.')
        .map(|segment| {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionParseError::new(
                    s,
                    format!("segment '{}' is not a number", segment),
                ));
            }
            segment
                .parse::<u64>()
                .map_err(|e| VersionParseError::new(s, e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(VersionTuple)
}

/// Returns true if `s` starts with `digits.digit`
///
/// This only sniffs the prefix: `2.14pre1` passes here but is rejected by
/// [`parse_version`].
pub fn looks_numeric(s: &str) -> bool {
    NUMERIC_PREFIX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VersionTuple {
        parse_version(s).unwrap()
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(v("2.14").parts(), &[2, 14]);
        assert_eq!(v("2.31.1").parts(), &[2, 31, 1]);
        assert_eq!(v("7").parts(), &[7]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(v(" 2.17 \n"), v("2.17"));
    }

    #[test]
    fn test_parse_rejects_suffix() {
        let err = parse_version("2.14pre1").unwrap_err();
        assert_eq!(err.input, "2.14pre1");
        assert!(err.to_string().contains("14pre1"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_version("").is_err());
        assert!(parse_version("--").is_err());
        assert!(parse_version("2..14").is_err());
        assert!(parse_version("2.14.").is_err());
        assert!(parse_version("-1.0").is_err());
        assert!(parse_version("2.x").is_err());
    }

    #[test]
    fn test_ordering_is_numeric_not_lexical() {
        assert!(v("2.9") < v("2.14"));
        assert!(v("2.14") < v("2.14.1"));
        assert!(v("2.14.1") < v("3.0"));
        assert!(v("10.0") > v("9.99"));
    }

    #[test]
    fn test_prefix_sorts_before_longer_tuple() {
        assert!(v("2.14") < v("2.14.0"));
        assert_ne!(v("2.14"), v("2.14.0"));
    }

    #[test]
    fn test_display_round_trips_digits() {
        assert_eq!(v("2.014").to_string(), "2.14");
        assert_eq!(v("1.2.3").to_string(), "1.2.3");
    }

    #[test]
    fn test_from_str() {
        let parsed: VersionTuple = "3.0".parse().unwrap();
        assert_eq!(parsed, VersionTuple::new(vec![3, 0]));
    }

    #[test]
    fn test_looks_numeric() {
        assert!(looks_numeric("2.14"));
        assert!(looks_numeric("2.14pre1"));
        assert!(looks_numeric("10.3.1"));
        assert!(!looks_numeric("--"));
        assert!(!looks_numeric(""));
        assert!(!looks_numeric("2"));
        assert!(!looks_numeric("2."));
        assert!(!looks_numeric("v2.14"));
        assert!(!looks_numeric(" 2.14"));
    }

    #[test]
    fn test_looks_numeric_ascii_digits_only() {
        // Arabic-Indic digits would pass a Unicode \d but never parse
        assert!(!looks_numeric("٢.١٤"));
        assert!(parse_version("٢.١٤").is_err());
        assert!(!looks_numeric("２.１４"));
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&v("2.17")).unwrap();
        assert_eq!(json, "\"2.17\"");
    }
}
