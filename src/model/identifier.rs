//! The 128-bit globally-unique identifier attached to every source asset.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of hexadecimal characters in the textual identifier form.
const IDENTIFIER_LEN: usize = 32;

fn identifier_pattern() -> &'static Regex {
  use std::sync::OnceLock;

  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN
    .get_or_init(|| Regex::new(r"^[0-9a-fA-F]{32}$").expect("invalid identifier regex"))
}

/// 128-bit globally-unique identifier of a source asset, parsed from a
/// fixed-length hexadecimal string.
///
/// Equality is bitwise; the canonical textual form is 32 lowercase hex
/// characters, which is also how the identifier serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Identifier(u128);

impl Identifier {
  /// Parse an identifier from its 32-character hexadecimal form.
  ///
  /// Accepts either case on input; the stored value is case-insensitive.
  pub fn parse(text: &str) -> Result<Self, MalformedIdentifier> {
    if !identifier_pattern().is_match(text) {
      return Err(MalformedIdentifier {
        text: text.to_string(),
      });
    }
    u128::from_str_radix(text, 16)
      .map(Self)
      .map_err(|_| MalformedIdentifier {
        text: text.to_string(),
      })
  }

  /// Raw 128-bit value.
  pub fn to_u128(self) -> u128 {
    self.0
  }
}

impl fmt::Display for Identifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:032x}", self.0)
  }
}

impl FromStr for Identifier {
  type Err = MalformedIdentifier;

  fn from_str(text: &str) -> Result<Self, Self::Err> {
    Self::parse(text)
  }
}

impl Serialize for Identifier {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Identifier {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let text = String::deserialize(deserializer)?;
    Self::parse(&text).map_err(serde::de::Error::custom)
  }
}

/// Error produced when an identifier string is not exactly 32 hex characters.
#[derive(Debug, Clone)]
pub struct MalformedIdentifier {
  text: String,
}

impl MalformedIdentifier {
  /// The rejected input text.
  pub fn text(&self) -> &str {
    &self.text
  }
}

impl fmt::Display for MalformedIdentifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "malformed identifier '{}': expected {} hexadecimal characters",
      self.text, IDENTIFIER_LEN
    )
  }
}

impl std::error::Error for MalformedIdentifier {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_and_canonicalizes_hex_text() {
    let text = "0123456789ABCDEF0123456789abcdef";
    let identifier = Identifier::parse(text).unwrap();
    assert_eq!(identifier.to_string(), text.to_ascii_lowercase());
  }

  #[test]
  fn round_trips_leading_zeroes() {
    let text = "00000000000000000000000000000a01";
    let identifier = Identifier::parse(text).unwrap();
    assert_eq!(identifier.to_string(), text);
  }

  #[test]
  fn rejects_wrong_length() {
    assert!(Identifier::parse("abc123").is_err());
    assert!(Identifier::parse(&"f".repeat(33)).is_err());
    assert!(Identifier::parse("").is_err());
  }

  #[test]
  fn rejects_non_hex_characters() {
    let err = Identifier::parse("g1111111111111111111111111111111").unwrap_err();
    assert!(err.to_string().contains("malformed identifier"));
  }

  #[test]
  fn equality_is_bitwise() {
    let upper = Identifier::parse("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap();
    let lower = Identifier::parse("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
    assert_eq!(upper, lower);
  }

  #[test]
  fn serializes_as_canonical_string() {
    let identifier = Identifier::parse("11111111111111111111111111111111").unwrap();
    let json = serde_json::to_string(&identifier).unwrap();
    assert_eq!(json, "\"11111111111111111111111111111111\"");

    let back: Identifier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, identifier);
  }
}
