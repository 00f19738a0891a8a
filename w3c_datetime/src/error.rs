use thiserror::Error;

/// Failure to turn text into a [`crate::DateTime`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The lexical shape of the input does not match any known precision.
    #[error("unknown datetime precision: {input:?}")]
    InvalidFormat { input: String },

    /// The shape matched a precision but the fields did not parse against its layout.
    #[error("invalid datetime {input:?}: {source}")]
    InvalidValue {
        input: String,
        #[source]
        source: ValueError,
    },

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {source}")]
    Utf8 {
        #[from]
        source: std::str::Utf8Error,
    },
}

impl ParseError {
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    pub fn invalid_value(input: impl Into<String>, source: ValueError) -> Self {
        Self::InvalidValue {
            input: input.into(),
            source,
        }
    }

    /// The offending input, if the error carries one.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::InvalidFormat { input } | Self::InvalidValue { input, .. } => Some(input),
            Self::Utf8 { .. } => None,
        }
    }

    #[inline]
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    #[inline]
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}

/// Diagnostic explaining why an input did not match its layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// A separator or marker byte was missing.
    #[error("expected '{}' at position {position}", *.expected as char)]
    Expected { expected: u8, position: usize },

    /// A byte was not valid for the field being read.
    #[error("invalid character: 0x{value:02x} at position {position}")]
    InvalidChar { value: u8, position: usize },

    /// Input ended before the layout was complete.
    #[error("incomplete data at position {position}")]
    Incomplete { position: usize },

    /// A field was lexically fine but outside its allowed range.
    #[error("{field} out of range at position {position}")]
    OutOfRange {
        field: &'static str,
        position: usize,
    },

    /// chrono rejected a single field value.
    #[error("invalid {field} at position {position}: {source}")]
    InvalidField {
        field: &'static str,
        position: usize,
        #[source]
        source: chrono::format::ParseError,
    },

    /// The layout was satisfied but input remained.
    #[error("unexpected trailing input at position {position}")]
    TrailingInput { position: usize },

    /// chrono rejected the combination of fields (e.g. 1997-02-30).
    #[error("{source}")]
    Chrono {
        #[from]
        source: chrono::format::ParseError,
    },
}
