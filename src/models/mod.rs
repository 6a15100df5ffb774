//! Data models for Parc

pub mod enums;
pub mod equipment;

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer};

// Re-export commonly used types
pub use enums::{DatePeriod, DateSort, EquipmentField, EquipmentStatus};
pub use equipment::{Equipment, EquipmentFilter, EquipmentInput, ListParams, UpdateEquipment};

/// Query-string value where an empty string means "not given", as sent by
/// a form field left blank
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}
