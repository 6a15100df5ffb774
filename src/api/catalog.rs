//! Equipment catalog endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    catalog::{reset_dependents, EquipmentCatalog, Selection, SelectionField},
    error::{AppError, AppResult},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectionRequest {
    /// Selection holding the new value of `changed`
    pub selection: Selection,
    pub changed: SelectionField,
}

/// Selection after dependents were cleared, with the choices left open
#[derive(Debug, Serialize, ToSchema)]
pub struct SelectionResponse {
    pub selection: Selection,
    /// Brands offered for the selected type
    pub brands: Vec<String>,
    /// Models offered for the selected type and brand
    pub models: Vec<String>,
}

/// Types, brands, models and directions known to the inventory
#[utoipa::path(
    get,
    path = "/catalog",
    tag = "catalog",
    responses(
        (status = 200, description = "Equipment catalog", body = EquipmentCatalog)
    )
)]
pub async fn get_catalog(State(state): State<crate::AppState>) -> Json<EquipmentCatalog> {
    Json(state.services.catalog.as_ref().clone())
}

/// Apply a change to a type/brand/model selection
#[utoipa::path(
    post,
    path = "/catalog/selection",
    tag = "catalog",
    request_body = SelectionRequest,
    responses(
        (status = 200, description = "Updated selection", body = SelectionResponse),
        (status = 400, description = "Unknown type", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_selection(
    State(state): State<crate::AppState>,
    Json(request): Json<SelectionRequest>,
) -> AppResult<Json<SelectionResponse>> {
    let catalog = &state.services.catalog;
    let selection = reset_dependents(request.selection, request.changed);

    if let Some(equipment_type) = selection.equipment_type.as_deref() {
        if !catalog.has_type(equipment_type) {
            return Err(AppError::invalid_field(
                "type",
                format!("Unknown equipment type '{}'", equipment_type),
            ));
        }
    }

    let brands: Vec<String> = selection
        .equipment_type
        .as_deref()
        .map(|t| catalog.brands(t).into_iter().map(str::to_string).collect())
        .unwrap_or_default();
    let models = match (selection.equipment_type.as_deref(), selection.marque.as_deref()) {
        (Some(t), Some(m)) => catalog.models(t, m).to_vec(),
        _ => Vec::new(),
    };

    Ok(Json(SelectionResponse {
        selection,
        brands,
        models,
    }))
}
