//! Dependent type/brand/model selection

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current type/brand/model choice of an equipment form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Selection {
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    pub marque: Option<String>,
    pub modele: Option<String>,
}

/// Which part of a [`Selection`] was just changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SelectionField {
    #[serde(rename = "type")]
    Type,
    Marque,
    Modele,
}

/// Clear whatever depends on `changed`. `selection` already holds the new
/// value of the changed field: a new type clears brand and model, a new
/// brand clears the model, a new model clears nothing.
pub fn reset_dependents(selection: Selection, changed: SelectionField) -> Selection {
    match changed {
        SelectionField::Type => Selection {
            equipment_type: selection.equipment_type,
            marque: None,
            modele: None,
        },
        SelectionField::Marque => Selection {
            modele: None,
            ..selection
        },
        SelectionField::Modele => selection,
    }
}
