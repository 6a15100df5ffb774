//! Equipment catalog: which brands exist for a type, which models for a
//! brand, and the set of directions.
//!
//! The catalog is static configuration. It is loaded once at startup, either
//! from the JSON file named in the configuration or from the copy embedded
//! in the binary, and shared read-only afterwards.

pub mod selection;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

pub use selection::{reset_dependents, Selection, SelectionField};

const BUILTIN_CATALOG: &str = include_str!("builtin.json");

/// Type -> brand -> models, plus the known directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentCatalog {
    #[schema(value_type = Object)]
    types: IndexMap<String, IndexMap<String, Vec<String>>>,
    directions: Vec<String>,
}

impl EquipmentCatalog {
    /// Parse a catalog from its JSON form
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::Internal(format!("Invalid equipment catalog: {}", e)))
    }

    /// The catalog shipped with the server
    pub fn builtin() -> AppResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Read the catalog file at `path`, or fall back to the built-in one
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    AppError::Internal(format!("Cannot read catalog {}: {}", path, e))
                })?;
                let catalog = Self::from_json(&json)?;
                tracing::info!(
                    "Loaded equipment catalog from {} ({} types, {} directions)",
                    path,
                    catalog.types.len(),
                    catalog.directions.len()
                );
                Ok(catalog)
            }
            None => {
                tracing::info!("Using built-in equipment catalog");
                Self::builtin()
            }
        }
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Brands offered for a type, empty for an unknown type
    pub fn brands(&self, equipment_type: &str) -> Vec<&str> {
        self.types
            .get(equipment_type)
            .map(|brands| brands.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Models offered for a type and brand, in catalog order
    pub fn models(&self, equipment_type: &str, marque: &str) -> &[String] {
        self.types
            .get(equipment_type)
            .and_then(|brands| brands.get(marque))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    pub fn has_type(&self, equipment_type: &str) -> bool {
        self.types.contains_key(equipment_type)
    }

    pub fn has_direction(&self, direction: &str) -> bool {
        self.directions.iter().any(|d| d == direction)
    }

    /// Check that `modele` belongs to `marque`, which belongs to `equipment_type`
    pub fn check_combination(
        &self,
        equipment_type: &str,
        marque: &str,
        modele: &str,
    ) -> AppResult<()> {
        let brands = self.types.get(equipment_type).ok_or_else(|| {
            AppError::invalid_field("type", format!("Unknown equipment type '{}'", equipment_type))
        })?;

        let models = brands.get(marque).ok_or_else(|| {
            AppError::invalid_field(
                "marque",
                format!("Brand '{}' is not offered for type '{}'", marque, equipment_type),
            )
        })?;

        if !models.iter().any(|m| m == modele) {
            return Err(AppError::invalid_field(
                "modele",
                format!("Model '{}' does not exist for {} {}", modele, equipment_type, marque),
            ));
        }

        Ok(())
    }
}
