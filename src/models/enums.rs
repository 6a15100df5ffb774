//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Known equipment statuses. Records store the label, not the variant, so a
/// record may carry a status outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EquipmentStatus {
    #[serde(rename = "Fonctionnel")]
    Functional,
    #[serde(rename = "Réformé en bureau")]
    ReformedInOffice,
    #[serde(rename = "Réformé en stock")]
    ReformedInStock,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 3] = [
        EquipmentStatus::Functional,
        EquipmentStatus::ReformedInOffice,
        EquipmentStatus::ReformedInStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Functional => "Fonctionnel",
            EquipmentStatus::ReformedInOffice => "Réformé en bureau",
            EquipmentStatus::ReformedInStock => "Réformé en stock",
        }
    }

    /// Exact label match
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    pub fn is_reformed(&self) -> bool {
        !matches!(self, EquipmentStatus::Functional)
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DateSort
// ---------------------------------------------------------------------------

/// Ordering of a filtered list by acquisition date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DateSort {
    #[default]
    #[serde(alias = "")]
    None,
    MostRecent,
    Oldest,
}

// ---------------------------------------------------------------------------
// DatePeriod
// ---------------------------------------------------------------------------

/// Bucket size for date-grouped counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatePeriod {
    #[default]
    #[serde(alias = "")]
    Year,
    Month,
    Day,
}

// ---------------------------------------------------------------------------
// EquipmentField
// ---------------------------------------------------------------------------

/// Descriptive equipment fields that can be tallied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentField {
    #[serde(rename = "type")]
    Type,
    Marque,
    Modele,
    Direction,
    Bureau,
    Statut,
}

impl EquipmentField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentField::Type => "type",
            EquipmentField::Marque => "marque",
            EquipmentField::Modele => "modele",
            EquipmentField::Direction => "direction",
            EquipmentField::Bureau => "bureau",
            EquipmentField::Statut => "statut",
        }
    }
}
