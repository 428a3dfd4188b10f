//! String-typed form values and their coercion into record fields.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// In-progress values a user edits before submit. Every field is text,
/// numeric and date fields included.
pub trait Draft: Default + Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Fields that must be non-blank at submit time.
    const REQUIRED: &'static [&'static str];

    fn value(&self, field: &str) -> Option<&str>;

    fn missing_required(&self) -> Vec<&'static str> {
        Self::REQUIRED
            .iter()
            .copied()
            .filter(|field| self.value(field).is_none_or(|v| v.trim().is_empty()))
            .collect()
    }

    fn check_required(&self) -> Result<(), ValidationError> {
        let fields = self.missing_required();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired { fields })
        }
    }
}

/// Empty input means "not set".
pub fn optional(raw: &str) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw.to_string()) }
}

pub fn parse_number<N: FromStr>(field: &'static str, raw: &str) -> Result<N, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

pub fn parse_optional_date(
    field: &'static str,
    raw: &str,
) -> Result<Option<NaiveDate>, ValidationError> {
    let raw_trimmed = raw.trim();
    if raw_trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw_trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}
