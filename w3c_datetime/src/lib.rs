//! Precision-aware parsing and formatting of W3C datetimes
//! (<https://www.w3.org/TR/NOTE-datetime>).
//!
//! ```
//! use w3c_datetime::{DateTime, Precision};
//!
//! let dt = DateTime::parse("1997-07-16T19:20+01:00").unwrap();
//! assert_eq!(dt.precision(), Precision::Hours);
//! assert_eq!(dt.to_string(), "1997-07-16T19:20+01:00");
//! ```

pub mod datetime;
pub mod error;
pub mod layout;
pub mod precision;
pub mod result;
pub mod text;
pub mod utils;

pub use datetime::{DateTime, parse};
pub use error::{ParseError, ValueError};
pub use precision::{Precision, classify_precision};
pub use result::ParseResult;
pub use text::{from_text, to_text};
