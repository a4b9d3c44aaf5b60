use super::{Cursor, DecodeError, WireValue};
use crate::schema::FieldType;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// Some endpoints send local date-times without an offset. Those are read as UTC.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A wire date-time. Keeps the exact text it was parsed from so it encodes back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Timestamp {
    raw: String,
    instant: DateTime<Utc>,
}

impl Timestamp {
    pub fn parse<S: Into<String>>(raw: S) -> Result<Self, chrono::ParseError> {
        let raw = raw.into();
        let instant = match DateTime::parse_from_rfc3339(&raw) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(e) => match NaiveDateTime::parse_from_str(&raw, NAIVE_FORMAT) {
                Ok(naive) => naive.and_utc(),
                Err(_) => return Err(e),
            },
        };
        Ok(Self { raw, instant })
    }

    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self {
            raw: instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            instant,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Timestamp::from_datetime(instant)
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(s)
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Timestamp) -> Ordering {
        self.instant.cmp(&other.instant).then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Timestamp) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl WireValue for Timestamp {
    fn wire_type() -> FieldType {
        FieldType::Timestamp
    }

    fn decode_value(raw: &Value, cx: &Cursor) -> Result<Self, DecodeError> {
        let text = match raw {
            Value::String(text) => text,
            other => return Err(DecodeError::unexpected(cx, Self::wire_type(), other)),
        };
        Timestamp::parse(text.as_str()).map_err(|e| DecodeError::malformed_timestamp(cx, text, e))
    }

    fn encode_value(&self) -> Value {
        Value::String(self.raw.clone())
    }
}
