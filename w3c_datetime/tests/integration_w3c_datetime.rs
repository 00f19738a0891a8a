//! End-to-end parse/format tests over the W3C NOTE-datetime examples.
//!
//! Covers classification, the parsed instant for every precision, canonical
//! round-trips through `format` and the text hooks, and the ordering of
//! shape classification before field validation.
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use rstest::rstest;
use tracing_subscriber::EnvFilter;
use w3c_datetime::{DateTime, ParseError, Precision, classify_precision, from_text, to_text};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn at(
    offset_secs: i32,
    ymd: (i32, u32, u32),
    hms: (u32, u32, u32),
    nano: u32,
) -> chrono::DateTime<FixedOffset> {
    let naive = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2)
        .unwrap()
        .and_hms_nano_opt(hms.0, hms.1, hms.2, nano)
        .unwrap();
    FixedOffset::east_opt(offset_secs)
        .unwrap()
        .from_local_datetime(&naive)
        .unwrap()
}

#[rstest]
#[case("1997", Precision::Year, at(0, (1997, 1, 1), (0, 0, 0), 0))]
#[case("1997-07", Precision::Month, at(0, (1997, 7, 1), (0, 0, 0), 0))]
#[case("1997-07-16", Precision::Day, at(0, (1997, 7, 16), (0, 0, 0), 0))]
#[case("1997-07-16T19:20+01:00", Precision::Hours, at(3600, (1997, 7, 16), (19, 20, 0), 0))]
#[case("1997-07-16T19:20:30+01:00", Precision::Seconds, at(3600, (1997, 7, 16), (19, 20, 30), 0))]
#[case(
    "1997-07-16T19:20:30.45+01:00",
    Precision::Nanoseconds,
    at(3600, (1997, 7, 16), (19, 20, 30), 450_000_000)
)]
#[case("1994-11-05T08:15:30Z", Precision::Seconds, at(0, (1994, 11, 5), (8, 15, 30), 0))]
fn test_scenarios(
    #[case] input: &str,
    #[case] precision: Precision,
    #[case] instant: chrono::DateTime<FixedOffset>,
) {
    init_tracing();

    assert_eq!(classify_precision(input), precision);

    let dt = DateTime::parse(input).unwrap();
    assert_eq!(dt.precision(), precision);
    assert_eq!(*dt.instant(), instant);
    assert_eq!(dt.instant().offset(), instant.offset());

    assert_eq!(dt.format(), input);
    assert_eq!(to_text(&dt), input.as_bytes());
    assert_eq!(from_text(input.as_bytes()).unwrap(), dt);
}

#[test]
fn test_invalid_is_unknown_and_invalid_format() {
    init_tracing();

    assert_eq!(classify_precision("invalid"), Precision::Unknown);
    let err = DateTime::parse("invalid").unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat { ref input } if input == "invalid"));
}

#[test]
fn test_shape_is_classified_before_values_are_checked() {
    // shape does not match any precision
    assert!(DateTime::parse("1997-07-16T19:20:30").unwrap_err().is_invalid_format());
    assert!(DateTime::parse("97-07-16T19:20:30Z").unwrap_err().is_invalid_format());

    // shape matches Seconds, fields do not
    assert!(DateTime::parse("97-07-1600T19:20:30Z").unwrap_err().is_invalid_value());
    assert!(DateTime::parse("1997-07-16T19:20:30+1:000").unwrap_err().is_invalid_value());
    assert!(DateTime::parse("1997-07-16T25:20:30Z").unwrap_err().is_invalid_value());
}

#[test]
fn test_invalid_value_reports_underlying_diagnostic() {
    use std::error::Error;

    let err = DateTime::parse("1997-07-16T19:20:30+01:0x").unwrap_err();
    assert!(err.to_string().starts_with("invalid datetime \"1997-07-16T19:20:30+01:0x\""));
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "invalid character: 0x78 at position 24");
}

#[test]
fn test_same_instant_at_every_precision() {
    let instant = Utc
        .with_ymd_and_hms(1994, 11, 5, 13, 15, 30)
        .unwrap()
        .with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());

    let rendered: Vec<String> = Precision::ALL
        .iter()
        .map(|&p| DateTime::with_precision(instant, p).format())
        .collect();

    assert_eq!(
        rendered,
        vec![
            "1994",
            "1994-11",
            "1994-11-05",
            "1994-11-05T08:15-05:00",
            "1994-11-05T08:15:30-05:00",
            "1994-11-05T08:15:30-05:00",
        ]
    );

    // a zero fraction is not rendered, so it reads back as Seconds
    let classified: Vec<Precision> = rendered.iter().map(|s| classify_precision(s)).collect();
    assert_eq!(
        classified,
        vec![
            Precision::Year,
            Precision::Month,
            Precision::Day,
            Precision::Hours,
            Precision::Seconds,
            Precision::Seconds,
        ]
    );
}

#[test]
fn test_parse_is_thread_safe() {
    let inputs = ["1997", "1997-07-16T19:20:30.45+01:00", "1994-11-05T08:15:30Z"];
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| std::thread::spawn(move || DateTime::parse(input).map(|dt| dt.format())))
        .collect();

    for (handle, input) in handles.into_iter().zip(inputs) {
        assert_eq!(handle.join().unwrap().unwrap(), input);
    }
}
