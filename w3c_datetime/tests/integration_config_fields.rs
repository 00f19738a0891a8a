//! `DateTime` and `Precision` as fields of serde-driven records: typed settings
//! loaded with `config` and JSON documents through `serde_json`.
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use w3c_datetime::{DateTime, Precision};

#[derive(Debug, Deserialize)]
struct FeedSettings {
    name: String,
    published: DateTime,
    updated: DateTime,
    granularity: Precision,
    expires: Option<DateTime>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Entry {
    id: u32,
    created: DateTime,
    modified: Vec<DateTime>,
}

const FEED_TOML: &str = r#"
name = "quotes"
published = "1997-07"
updated = "1997-07-16T19:20:30.45+01:00"
granularity = "hours"
"#;

fn load(toml: &str) -> Result<FeedSettings, config::ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

#[test]
fn test_config_fields() {
    let settings = load(FEED_TOML).unwrap();

    assert_eq!(settings.name, "quotes");
    assert_eq!(settings.published.precision(), Precision::Month);
    assert_eq!(settings.published.to_string(), "1997-07");
    assert_eq!(settings.updated.precision(), Precision::Nanoseconds);
    assert_eq!(settings.updated.to_string(), "1997-07-16T19:20:30.45+01:00");
    assert_eq!(settings.granularity, Precision::Hours);
    assert!(settings.expires.is_none());
}

#[test]
fn test_config_rejects_invalid_datetime() {
    let toml = FEED_TOML.replace("\"1997-07\"", "\"July 1997\"");
    let err = load(&toml).unwrap_err();
    assert!(
        err.to_string().contains("unknown datetime precision"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_json_record_round_trip() {
    let entry = Entry {
        id: 7,
        created: "1994-11-05T08:15:30Z".parse().unwrap(),
        modified: vec!["1997".parse().unwrap(), "1997-07-16".parse().unwrap()],
    };

    let json = serde_json::to_string(&entry).unwrap();
    assert_eq!(
        json,
        r#"{"id":7,"created":"1994-11-05T08:15:30Z","modified":["1997","1997-07-16"]}"#
    );

    let back: Entry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
    assert_eq!(back.modified[0].precision(), Precision::Year);
}

#[test]
fn test_json_reports_invalid_value() {
    let err = serde_json::from_str::<Entry>(r#"{"id":1,"created":"1997-13","modified":[]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("invalid datetime \"1997-13\""));
}
