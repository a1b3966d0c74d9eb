//! The shared contract every entity kind implements, plus batch validation.

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::{parse_calendar_date, Collection};
use crate::errors::AppError;

/// A record stored in one of the portfolio collections.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection this kind lives in.
    const COLLECTION: Collection;
    /// Singular name used in validation messages.
    const LABEL: &'static str;

    /// Field-level checks that the type system does not already enforce.
    fn check(&self) -> Result<(), String>;

    /// Key the dashboard uses to tell siblings apart, when the kind has one.
    fn identity(&self) -> Option<&str> {
        None
    }

    /// Date the collection is ordered by, newest first.
    fn canonical_date(&self) -> Option<NaiveDate> {
        None
    }
}

/// Fail when a required text field is empty or whitespace.
pub fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("missing required field `{}`", field))
    } else {
        Ok(())
    }
}

/// Fail when a required date field does not parse as a calendar date.
pub fn require_date(field: &str, value: &str) -> Result<(), String> {
    require(field, value)?;
    match parse_calendar_date(value) {
        Some(_) => Ok(()),
        None => Err(format!("invalid `{}` format: {:?} is not a date", field, value)),
    }
}

/// Decode and check a whole replacement batch.
///
/// All-or-nothing: the first bad record rejects the batch. Records come back in input order.
pub fn validate_batch<T: Record>(data: Value) -> Result<Vec<T>, AppError> {
    let Value::Array(items) = data else {
        return Err(AppError::BadRequest(
            "Invalid data format: `data` must be an array".to_string(),
        ));
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record: T = serde_json::from_value(item).map_err(|e| {
            AppError::Validation(format!("Invalid {} at index {}: {}", T::LABEL, index, e))
        })?;
        record.check().map_err(|msg| {
            AppError::Validation(format!("Invalid {} at index {}: {}", T::LABEL, index, msg))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Identity keys that appear more than once in a batch.
pub fn duplicate_identities<T: Record>(records: &[T]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = Vec::new();
    for key in records.iter().filter_map(|r| r.identity()) {
        if !seen.insert(key) && !duplicates.iter().any(|d| d == key) {
            duplicates.push(key.to_string());
        }
    }
    duplicates
}

/// Put records into their collection's canonical order (stable, newest first).
///
/// Kinds without a canonical order are left as given.
pub fn sort_canonical<T: Record>(records: &mut [T]) {
    if T::COLLECTION.has_canonical_order() {
        records.sort_by(|a, b| b.canonical_date().cmp(&a.canonical_date()));
    }
}
