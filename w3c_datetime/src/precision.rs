use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of a W3C datetime.
///
/// Variants are declared coarsest first, so the derived ordering follows
/// granularity with [`Precision::Unknown`] sorting before everything else.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Precision {
    #[default]
    Unknown,
    /// Year: `YYYY` (eg `1997`)
    Year,
    /// Year and month: `YYYY-MM` (eg `1997-07`)
    Month,
    /// Complete date: `YYYY-MM-DD` (eg `1997-07-16`)
    Day,
    /// Complete date plus hours and minutes (eg `1997-07-16T19:20+01:00`)
    Hours,
    /// Complete date plus hours, minutes and seconds (eg `1997-07-16T19:20:30+01:00`)
    Seconds,
    /// Complete date plus hours, minutes, seconds and a decimal fraction of a
    /// second (eg `1997-07-16T19:20:30.45+01:00`)
    Nanoseconds,
}

impl Precision {
    /// Every known precision, coarsest first.
    pub const ALL: [Precision; 6] = [
        Precision::Year,
        Precision::Month,
        Precision::Day,
        Precision::Hours,
        Precision::Seconds,
        Precision::Nanoseconds,
    ];

    /// Layout pattern used to parse and render this precision, or `""` for
    /// [`Precision::Unknown`].
    ///
    /// `ZZZZZ` is the offset (`Z` or `±hh:mm`) and `.fffffffff` is a fraction
    /// of one to nine digits, rendered with trailing zeros trimmed.
    #[inline]
    pub const fn layout(self) -> &'static str {
        match self {
            Precision::Year => "YYYY",
            Precision::Month => "YYYY-MM",
            Precision::Day => "YYYY-MM-DD",
            Precision::Hours => "YYYY-MM-DDThh:mmZZZZZ",
            Precision::Seconds => "YYYY-MM-DDThh:mm:ssZZZZZ",
            Precision::Nanoseconds => "YYYY-MM-DDThh:mm:ss.fffffffffZZZZZ",
            Precision::Unknown => "",
        }
    }

    /// Human readable template as written in the W3C note. Not a parse layout.
    #[inline]
    pub const fn display_name(self) -> &'static str {
        match self {
            Precision::Year => "YYYY",
            Precision::Month => "YYYY-MM",
            Precision::Day => "YYYY-MM-DD",
            Precision::Hours => "YYYY-MM-DDThh:mmTZD",
            Precision::Seconds => "YYYY-MM-DDThh:mm:ssTZD",
            Precision::Nanoseconds => "YYYY-MM-DDThh:mm:ss.sTZD",
            Precision::Unknown => "",
        }
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, Precision::Unknown)
    }

    /// Whether the precision carries a time of day, and therefore an offset.
    #[inline]
    pub const fn has_time(self) -> bool {
        matches!(
            self,
            Precision::Hours | Precision::Seconds | Precision::Nanoseconds
        )
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Byte index the `T` separator must sit at: right after `YYYY-MM-DD`.
const TIME_SEPARATOR_INDEX: usize = 10;

/// Detects the precision of `input` from its lexical shape alone.
///
/// No field is validated here; `"9999-99-99"` classifies as [`Precision::Day`].
pub fn classify_precision(input: &str) -> Precision {
    match input.find('T') {
        Some(TIME_SEPARATOR_INDEX) => classify_date_time(input, TIME_SEPARATOR_INDEX),
        Some(_) => Precision::Unknown,
        None => classify_date(input),
    }
}

fn classify_date(input: &str) -> Precision {
    match (input.matches('-').count(), input.len()) {
        (0, 4) => Precision::Year,
        (1, 7) => Precision::Month,
        (2, 10) => Precision::Day,
        _ => Precision::Unknown,
    }
}

fn classify_date_time(input: &str, t: usize) -> Precision {
    // The offset marker is the last 'Z', '+' or '-' anywhere in the input.
    let boundary = input.rfind(['Z', '+', '-']).unwrap_or(input.len());
    // A marker left of 'T' (only date dashes present) gives an empty range.
    let Some(time) = input.get(t..boundary) else {
        return Precision::Unknown;
    };
    match (time.matches(':').count(), boundary) {
        (1, 16) => Precision::Hours,
        (2, b) if b >= 19 => {
            if time.contains('.') {
                Precision::Nanoseconds
            } else {
                Precision::Seconds
            }
        }
        _ => Precision::Unknown,
    }
}
