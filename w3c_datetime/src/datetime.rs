use crate::{
    ParseError, ParseResult, layout,
    precision::{Precision, classify_precision},
};
use chrono::{FixedOffset, TimeZone, Utc};
use std::{fmt, str::FromStr};

/// A W3C datetime: an instant together with the precision it is expressed at.
///
/// See <https://www.w3.org/TR/NOTE-datetime>. Fields finer than the precision
/// are kept on the instant but are not rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    instant: chrono::DateTime<FixedOffset>,
    precision: Precision,
}

impl DateTime {
    /// Create a [`DateTime`] with the highest precision ([`Precision::Nanoseconds`])
    #[inline]
    pub fn new<Tz: TimeZone>(instant: chrono::DateTime<Tz>) -> Self {
        Self::with_precision(instant, Precision::Nanoseconds)
    }

    /// Create a [`DateTime`] with the given precision.
    ///
    /// Passing [`Precision::Unknown`] is allowed but such a value formats as
    /// an empty string.
    #[inline]
    pub fn with_precision<Tz: TimeZone>(instant: chrono::DateTime<Tz>, precision: Precision) -> Self {
        Self {
            instant: instant.fixed_offset(),
            precision,
        }
    }

    /// Parse a W3C datetime, detecting its precision from the input shape.
    #[tracing::instrument(level = "trace", name = "parse_w3c_datetime")]
    pub fn parse(input: &str) -> ParseResult<Self> {
        let precision = classify_precision(input);
        tracing::trace!(?precision, layout = %precision, "classified datetime precision");
        if !precision.is_known() {
            return Err(ParseError::invalid_format(input));
        }

        let instant = layout::parse(input, precision)
            .map_err(|source| ParseError::invalid_value(input, source))?;
        Ok(Self { instant, precision })
    }

    /// Render back to text at this value's precision.
    ///
    /// The precision must not be [`Precision::Unknown`]; if it is, the result
    /// is empty.
    #[inline]
    pub fn format(&self) -> String {
        self.to_string()
    }

    #[inline]
    pub fn instant(&self) -> &chrono::DateTime<FixedOffset> {
        &self.instant
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    #[inline]
    pub fn into_inner(self) -> chrono::DateTime<FixedOffset> {
        self.instant
    }

    /// Convert into `DateTime<Utc>`
    #[inline]
    pub fn to_utc(&self) -> chrono::DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }
}

/// Parse a W3C datetime. See [`DateTime::parse`].
#[inline]
pub fn parse(input: &str) -> ParseResult<DateTime> {
    DateTime::parse(input)
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        layout::write(f, &self.instant, self.precision)
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> ParseResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DateTime {
    type Error = ParseError;

    #[inline]
    fn try_from(s: &str) -> ParseResult<Self> {
        Self::parse(s)
    }
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for DateTime {
    #[inline]
    fn from(instant: chrono::DateTime<Tz>) -> Self {
        Self::new(instant)
    }
}

impl From<DateTime> for chrono::DateTime<FixedOffset> {
    #[inline]
    fn from(dt: DateTime) -> Self {
        dt.instant
    }
}
