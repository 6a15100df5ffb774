//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::{DateSort, EquipmentField};

/// Equipment record.
///
/// Every descriptive field is optional: records coming back from the store
/// are not guaranteed to be complete, and aggregations skip what they cannot
/// use instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: Uuid,
    /// Equipment type (catalog key, e.g. "Imprimante")
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    /// Brand
    pub marque: Option<String>,
    /// Model
    pub modele: Option<String>,
    /// Owning direction
    pub direction: Option<String>,
    /// Office label (free text)
    pub bureau: Option<String>,
    /// Serial number, uppercase alphanumeric
    pub numero_serie: Option<String>,
    /// Status label ("Fonctionnel", "Réformé en bureau", "Réformé en stock")
    pub statut: Option<String>,
    /// Acquisition date as entered (YYYY-MM-DD or an ISO timestamp)
    pub date: Option<String>,
    /// Creation time, set by the store
    #[serde(rename = "dateAdded")]
    pub date_added: DateTime<Utc>,
}

impl Equipment {
    /// Value of a descriptive field
    pub fn field(&self, field: EquipmentField) -> Option<&str> {
        match field {
            EquipmentField::Type => self.equipment_type.as_deref(),
            EquipmentField::Marque => self.marque.as_deref(),
            EquipmentField::Modele => self.modele.as_deref(),
            EquipmentField::Direction => self.direction.as_deref(),
            EquipmentField::Bureau => self.bureau.as_deref(),
            EquipmentField::Statut => self.statut.as_deref(),
        }
    }
}

/// Create / replace equipment request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct EquipmentInput {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub equipment_type: String,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub marque: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub modele: String,
    #[validate(length(min = 1, message = "Direction is required"))]
    pub direction: String,
    #[validate(length(min = 1, message = "Office is required"))]
    pub bureau: String,
    #[validate(length(min = 1, message = "Serial number is required"))]
    pub numero_serie: String,
    #[validate(length(min = 1, message = "Status is required"))]
    pub statut: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
}

/// Update equipment request.
///
/// `dateAdded` is accepted only so that a client echoing the full record back
/// is not rejected; any value other than the stored one is refused.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    #[serde(flatten)]
    pub fields: EquipmentInput,
    #[serde(rename = "dateAdded", default)]
    pub date_added: Option<DateTime<Utc>>,
}

/// Equipment table filters (all criteria are ANDed, unset ones are ignored)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EquipmentFilter {
    /// Exact status
    pub statut: Option<String>,
    /// Exact type
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    /// Exact brand
    pub marque: Option<String>,
    /// Exact model
    pub modele: Option<String>,
    /// Exact direction
    pub direction: Option<String>,
    /// Serial number fragment (upper-cased before matching)
    pub numero_serie: Option<String>,
    /// Office label fragment (case-sensitive)
    pub bureau: Option<String>,
    /// Exact calendar day
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub date: Option<NaiveDate>,
    /// Inclusive lower bound
    #[serde(default, alias = "startDate", deserialize_with = "super::empty_as_none")]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound
    #[serde(default, alias = "endDate", deserialize_with = "super::empty_as_none")]
    pub end_date: Option<NaiveDate>,
}

/// Ordering and paging part of the GET /equipment query string
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Reorder by acquisition date (none, mostRecent, oldest)
    #[serde(default, alias = "dateSort")]
    pub date_sort: DateSort,
    /// Page number (default: 1)
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub page: Option<usize>,
}
