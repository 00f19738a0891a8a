//! Interpretation of the layout patterns returned by [`Precision::layout`].
//!
//! A layout is a sequence of field placeholders (`YYYY`, `MM`, `DD`, `hh`,
//! `mm`, `ss`, `.fffffffff`, `ZZZZZ`) and literal separators. Parsing walks the
//! pattern against the input with exact widths; rendering walks it against an
//! instant. Field values are validated by chrono's [`Parsed`].

use crate::{
    error::ValueError,
    precision::Precision,
    utils::{expect_byte, parser_digits},
};
use chrono::{DateTime, Datelike, FixedOffset, Timelike, format::Parsed};
use std::fmt;

const NANO_PER_SEC: u32 = 1_000_000_000;
const FRACTION_DIGITS: usize = 9;
const SECS_PER_HOUR: i64 = 3600;
const SECS_PER_MINUTE: i64 = 60;

/// One element of a layout pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Fraction,
    Offset,
    Literal(u8),
}

impl Item {
    const PLACEHOLDERS: [(&'static [u8], Item); 8] = [
        (b"YYYY", Item::Year),
        (b"MM", Item::Month),
        (b"DD", Item::Day),
        (b"hh", Item::Hour),
        (b"mm", Item::Minute),
        (b"ss", Item::Second),
        (b".fffffffff", Item::Fraction),
        (b"ZZZZZ", Item::Offset),
    ];
}

/// Iterator over the [`Item`]s of a layout pattern.
#[derive(Debug, Clone)]
pub struct Items<'a> {
    rest: &'a [u8],
}

impl<'a> Items<'a> {
    pub fn new(layout: &'a str) -> Self {
        Self {
            rest: layout.as_bytes(),
        }
    }
}

impl Iterator for Items<'_> {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        let (&first, tail) = self.rest.split_first()?;
        for (placeholder, item) in Item::PLACEHOLDERS {
            if let Some(after) = self.rest.strip_prefix(placeholder) {
                self.rest = after;
                return Some(item);
            }
        }
        self.rest = tail;
        Some(Item::Literal(first))
    }
}

/// Parses `input` strictly against the layout of `precision`.
///
/// Fields the layout does not mention default to the start of the period and
/// date-only layouts are placed at UTC.
pub fn parse(input: &str, precision: Precision) -> Result<DateTime<FixedOffset>, ValueError> {
    let b = input.as_bytes();
    let mut parsed = Parsed::new();
    let mut pos = 0;

    for item in Items::new(precision.layout()) {
        pos += match item {
            Item::Year => parse_field(b, pos, 4, "year", &mut parsed, Parsed::set_year)?,
            Item::Month => parse_field(b, pos, 2, "month", &mut parsed, Parsed::set_month)?,
            Item::Day => parse_field(b, pos, 2, "day", &mut parsed, Parsed::set_day)?,
            Item::Hour => parse_field(b, pos, 2, "hour", &mut parsed, Parsed::set_hour)?,
            Item::Minute => parse_field(b, pos, 2, "minute", &mut parsed, Parsed::set_minute)?,
            Item::Second => {
                // chrono admits 60 for leap seconds; they are not supported here
                if parser_digits::parse_fixed(b, pos, 2)? > 59 {
                    return Err(ValueError::OutOfRange {
                        field: "second",
                        position: pos,
                    });
                }
                parse_field(b, pos, 2, "second", &mut parsed, Parsed::set_second)?
            }
            Item::Fraction => parse_fraction(b, pos, &mut parsed)?,
            Item::Offset => parse_offset(b, pos, &mut parsed)?,
            Item::Literal(expected) => {
                expect_byte(b, pos, expected)?;
                1
            }
        };
    }

    if pos != b.len() {
        return Err(ValueError::TrailingInput { position: pos });
    }

    fill_defaults(&mut parsed, precision)?;
    Ok(parsed.to_datetime()?)
}

fn parse_field(
    b: &[u8],
    pos: usize,
    width: usize,
    field: &'static str,
    parsed: &mut Parsed,
    set: fn(&mut Parsed, i64) -> chrono::format::ParseResult<()>,
) -> Result<usize, ValueError> {
    let value = parser_digits::parse_fixed(b, pos, width)?;
    set(parsed, value).map_err(|source| ValueError::InvalidField {
        field,
        position: pos,
        source,
    })?;
    Ok(width)
}

fn parse_fraction(b: &[u8], pos: usize, parsed: &mut Parsed) -> Result<usize, ValueError> {
    expect_byte(b, pos, b'.')?;
    let (digits, len) = parser_digits::parse_run(b, pos + 1, FRACTION_DIGITS, "fraction")?;
    let scale = 10i64.pow((FRACTION_DIGITS - len) as u32);
    parsed
        .set_nanosecond(digits * scale)
        .map_err(|source| ValueError::InvalidField {
            field: "fraction",
            position: pos + 1,
            source,
        })?;
    Ok(1 + len)
}

/// Offset grammar: `Z` or `±hh:mm`.
fn parse_offset(b: &[u8], pos: usize, parsed: &mut Parsed) -> Result<usize, ValueError> {
    let (seconds, len) = match b.get(pos) {
        Some(b'Z') => (0, 1),
        Some(&sign @ (b'+' | b'-')) => {
            let hours = parser_digits::parse_fixed(b, pos + 1, 2)?;
            expect_byte(b, pos + 3, b':')?;
            let minutes = parser_digits::parse_fixed(b, pos + 4, 2)?;
            if hours > 23 {
                return Err(ValueError::OutOfRange {
                    field: "offset hour",
                    position: pos + 1,
                });
            }
            if minutes > 59 {
                return Err(ValueError::OutOfRange {
                    field: "offset minute",
                    position: pos + 4,
                });
            }
            let seconds = hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE;
            (if sign == b'-' { -seconds } else { seconds }, 6)
        }
        Some(&value) => {
            return Err(ValueError::InvalidChar {
                value,
                position: pos,
            });
        }
        None => return Err(ValueError::Incomplete { position: pos }),
    };
    parsed
        .set_offset(seconds)
        .map_err(|source| ValueError::InvalidField {
            field: "offset",
            position: pos,
            source,
        })?;
    Ok(len)
}

fn fill_defaults(parsed: &mut Parsed, precision: Precision) -> Result<(), ValueError> {
    if precision < Precision::Month {
        parsed.set_month(1)?;
    }
    if precision < Precision::Day {
        parsed.set_day(1)?;
    }
    if !precision.has_time() {
        parsed.set_hour(0)?;
        parsed.set_minute(0)?;
        parsed.set_offset(0)?;
    }
    if precision < Precision::Seconds {
        parsed.set_second(0)?;
    }
    Ok(())
}

/// Renders `instant` in its own offset against the layout of `precision`.
///
/// [`Precision::Unknown`] has an empty layout and renders nothing.
pub fn write<W: fmt::Write>(
    w: &mut W,
    instant: &DateTime<FixedOffset>,
    precision: Precision,
) -> fmt::Result {
    for item in Items::new(precision.layout()) {
        match item {
            Item::Year => write!(w, "{:04}", instant.year())?,
            Item::Month => write!(w, "{:02}", instant.month())?,
            Item::Day => write!(w, "{:02}", instant.day())?,
            Item::Hour => write!(w, "{:02}", instant.hour())?,
            Item::Minute => write!(w, "{:02}", instant.minute())?,
            Item::Second => write!(w, "{:02}", instant.second())?,
            Item::Fraction => write_fraction(w, instant.nanosecond() % NANO_PER_SEC)?,
            Item::Offset => write_offset(w, instant.offset().local_minus_utc())?,
            Item::Literal(c) => w.write_char(char::from(c))?,
        }
    }
    Ok(())
}

/// Trailing zeros are trimmed; a zero fraction is omitted with its dot.
fn write_fraction<W: fmt::Write>(w: &mut W, nanos: u32) -> fmt::Result {
    if nanos == 0 {
        return Ok(());
    }
    let mut value = nanos;
    let mut width = FRACTION_DIGITS;
    while value % 10 == 0 {
        value /= 10;
        width -= 1;
    }
    write!(w, ".{value:0width$}")
}

fn write_offset<W: fmt::Write>(w: &mut W, seconds: i32) -> fmt::Result {
    if seconds == 0 {
        return w.write_char('Z');
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    write!(w, "{sign}{:02}:{:02}", abs / 3600, abs % 3600 / 60)
}
