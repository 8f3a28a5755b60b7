//! Load-time schema validation for persisted walker collections.
//!
//! There is no schema version in storage. A collection written by an older
//! build is recognised structurally and replaced by the seed catalog.

use std::fmt;

use serde_json::Value;

use super::model::Walker;
use super::seed::SEED_WALKER_COUNT;

/// Why a persisted walker collection was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    /// The stored text is not valid JSON.
    Unparsable(String),
    /// The stored value is not a JSON array.
    NotASequence,
    /// Fewer entries than the seed catalog.
    TooShort { found: usize },
    /// An entry lacks numeric `lat`/`lng`.
    MissingCoordinates { index: usize },
    /// An entry has coordinates but does not match the walker shape.
    Malformed(String),
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaleReason::Unparsable(e) => write!(f, "stored walkers are not valid JSON: {}", e),
            StaleReason::NotASequence => write!(f, "stored walkers are not a list"),
            StaleReason::TooShort { found } => write!(
                f,
                "stored walkers list has {} entries, expected at least {}",
                found, SEED_WALKER_COUNT
            ),
            StaleReason::MissingCoordinates { index } => {
                write!(f, "stored walker #{} has no numeric lat/lng", index)
            }
            StaleReason::Malformed(e) => write!(f, "stored walkers do not match schema: {}", e),
        }
    }
}

/// Outcome of validating the persisted walkers blob.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkerLoad {
    /// Nothing stored yet.
    Missing,
    /// Stored collection passed validation.
    Valid(Vec<Walker>),
    /// Stored collection must be replaced by the seed catalog.
    Stale(StaleReason),
}

/// Validates the raw persisted walkers value.
pub fn validate_walkers(raw: Option<&str>) -> WalkerLoad {
    let Some(raw) = raw else {
        return WalkerLoad::Missing;
    };

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => return WalkerLoad::Stale(StaleReason::Unparsable(e.to_string())),
    };

    let Some(entries) = value.as_array() else {
        return WalkerLoad::Stale(StaleReason::NotASequence);
    };

    if entries.len() < SEED_WALKER_COUNT {
        return WalkerLoad::Stale(StaleReason::TooShort {
            found: entries.len(),
        });
    }

    if let Some(index) = entries.iter().position(|entry| !has_numeric_coordinates(entry)) {
        return WalkerLoad::Stale(StaleReason::MissingCoordinates { index });
    }

    match serde_json::from_value::<Vec<Walker>>(value) {
        Ok(walkers) => WalkerLoad::Valid(walkers),
        Err(e) => WalkerLoad::Stale(StaleReason::Malformed(e.to_string())),
    }
}

fn has_numeric_coordinates(entry: &Value) -> bool {
    entry.get("lat").is_some_and(Value::is_number) && entry.get("lng").is_some_and(Value::is_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::seed_walkers;
    use serde_json::json;

    #[test]
    fn test_missing_value() {
        assert_eq!(validate_walkers(None), WalkerLoad::Missing);
    }

    #[test]
    fn test_seed_catalog_round_trips_as_valid() {
        let raw = serde_json::to_string(&seed_walkers()).unwrap();
        assert_eq!(validate_walkers(Some(&raw)), WalkerLoad::Valid(seed_walkers()));
    }

    #[test]
    fn test_unparsable_is_stale() {
        assert!(matches!(
            validate_walkers(Some("[{")),
            WalkerLoad::Stale(StaleReason::Unparsable(_))
        ));
    }

    #[test]
    fn test_object_is_not_a_sequence() {
        assert_eq!(
            validate_walkers(Some(r#"{"w1": {}}"#)),
            WalkerLoad::Stale(StaleReason::NotASequence)
        );
    }

    #[test]
    fn test_short_list_is_stale() {
        let raw = serde_json::to_string(&seed_walkers()[..1]).unwrap();
        assert_eq!(
            validate_walkers(Some(&raw)),
            WalkerLoad::Stale(StaleReason::TooShort { found: 1 })
        );
    }

    #[test]
    fn test_entry_without_coordinates_is_stale() {
        let mut value = serde_json::to_value(seed_walkers()).unwrap();
        value[1].as_object_mut().unwrap().remove("lng");

        assert_eq!(
            validate_walkers(Some(&value.to_string())),
            WalkerLoad::Stale(StaleReason::MissingCoordinates { index: 1 })
        );
    }

    #[test]
    fn test_string_coordinates_are_stale() {
        let mut value = serde_json::to_value(seed_walkers()).unwrap();
        value[0]["lat"] = json!("51.1784");

        assert_eq!(
            validate_walkers(Some(&value.to_string())),
            WalkerLoad::Stale(StaleReason::MissingCoordinates { index: 0 })
        );
    }

    #[test]
    fn test_wrong_shape_with_coordinates_is_malformed() {
        let raw = json!([
            {"lat": 1.0, "lng": 2.0},
            {"lat": 1.0, "lng": 2.0},
            {"lat": 1.0, "lng": 2.0}
        ])
        .to_string();

        assert!(matches!(
            validate_walkers(Some(&raw)),
            WalkerLoad::Stale(StaleReason::Malformed(_))
        ));
    }
}
