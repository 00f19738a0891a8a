//! Text marshaling hooks, so a [`DateTime`] can sit in any serde record.

use crate::{DateTime, ParseResult};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};
use std::fmt;

/// Parse a [`DateTime`] from UTF-8 encoded text.
#[inline]
pub fn from_text(text: &[u8]) -> ParseResult<DateTime> {
    DateTime::parse(std::str::from_utf8(text)?)
}

/// Render a [`DateTime`] as UTF-8 encoded text. Never fails.
#[inline]
pub fn to_text(value: &DateTime) -> Vec<u8> {
    value.format().into_bytes()
}

impl TryFrom<&[u8]> for DateTime {
    type Error = crate::ParseError;

    #[inline]
    fn try_from(text: &[u8]) -> ParseResult<Self> {
        from_text(text)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DateTimeVisitor;

impl Visitor<'_> for DateTimeVisitor {
    type Value = DateTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a W3C datetime string such as 1997-07-16T19:20:30.45+01:00")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DateTime, E> {
        DateTime::parse(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<DateTime, E> {
        from_text(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DateTimeVisitor)
    }
}
