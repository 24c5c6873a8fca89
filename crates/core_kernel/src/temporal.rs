//! Wire date handling
//!
//! Persisted documents carry calendar dates as `"dd/mm/yyyy"` strings.
//! These serde adapters keep that format in one place.

use chrono::NaiveDate;
use thiserror::Error;

pub const WIRE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date '{0}', expected dd/mm/yyyy")]
    InvalidDate(String),
}

/// Parses a `dd/mm/yyyy` wire date
pub fn parse_wire_date(s: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(s, WIRE_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(s.to_string()))
}

/// Formats a date for the wire
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Serde adapter for `NaiveDate` fields carried as `dd/mm/yyyy` strings
///
/// Use as `#[serde(with = "core_kernel::temporal::wire_date")]`.
pub mod wire_date {
    use super::{format_wire_date, parse_wire_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_wire_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_wire_date(&s).map_err(serde::de::Error::custom)
    }

    /// Variant for `Option<NaiveDate>`; a missing or null field is `None`.
    pub mod option {
        use super::{format_wire_date, parse_wire_date};
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match date {
                Some(d) => serializer.serialize_some(&format_wire_date(*d)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            match raw {
                Some(s) => parse_wire_date(&s)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}
