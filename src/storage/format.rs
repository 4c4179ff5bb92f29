// src/storage/format.rs
//
// Encodings used in the catalog file:
// - dates as dd/mm/yyyy strings
// - durations as whole seconds

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a dd/mm/yyyy date
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// serde adapter for `Option<NaiveDate>` fields
/// Use with `#[serde(default, with = "crate::storage::format::optional_date")]`
pub mod optional_date {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            Some(text) if !text.trim().is_empty() => parse_date(&text)
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("invalid date '{}': {}", text, e))),
            _ => Ok(None),
        }
    }
}

/// serde adapter for required `NaiveDate` fields
pub mod date {
    use super::*;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_date(&text)
            .map_err(|e| serde::de::Error::custom(format!("invalid date '{}': {}", text, e)))
    }
}

/// serde adapter encoding a `Duration` as whole seconds
pub mod duration_secs {
    use std::time::Duration;

    use super::*;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Sample {
        #[serde(default, with = "optional_date")]
        watched: Option<NaiveDate>,
        #[serde(with = "duration_secs")]
        length: std::time::Duration,
    }

    #[test]
    fn test_parse_and_format() {
        let date = parse_date("05/03/2021").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 5).unwrap());
        assert_eq!(format_date(date), "05/03/2021");
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(parse_date("2021-03-05").is_err());
        assert!(parse_date("31/02/2021").is_err());
    }

    #[test]
    fn test_serde_adapters() {
        let sample = Sample {
            watched: NaiveDate::from_ymd_opt(2020, 12, 31),
            length: std::time::Duration::from_secs(5400),
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"watched":"31/12/2020","length":5400}"#);
        assert_eq!(serde_json::from_str::<Sample>(&json).unwrap(), sample);
    }

    #[test]
    fn test_missing_or_null_date_is_none() {
        let sample: Sample = serde_json::from_str(r#"{"length":60}"#).unwrap();
        assert_eq!(sample.watched, None);
        let sample: Sample = serde_json::from_str(r#"{"watched":null,"length":60}"#).unwrap();
        assert_eq!(sample.watched, None);
    }

    #[test]
    fn test_bad_date_is_an_error() {
        assert!(serde_json::from_str::<Sample>(r#"{"watched":"soon","length":60}"#).is_err());
    }
}
