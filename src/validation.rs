//! Write-time checks on equipment input

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;
use validator::Validate;

use crate::{
    catalog::EquipmentCatalog,
    engine::dates::parse_day,
    error::{AppError, AppResult},
    models::{Equipment, EquipmentInput, EquipmentStatus},
};

static SERIAL_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]*$").unwrap());

/// Trim and upper-case a serial number as typed
pub fn normalize_serial_number(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Serial numbers are uppercase letters and digits only
pub fn validate_serial_number(serial: &str) -> AppResult<()> {
    if SERIAL_NUMBER_RE.is_match(serial) {
        Ok(())
    } else {
        Err(AppError::invalid_field(
            "numero_serie",
            "Serial number may only contain uppercase letters and digits",
        ))
    }
}

/// Reject `serial` if a record other than `exclude` already carries it
pub fn ensure_unique_serial(
    records: &[Equipment],
    serial: &str,
    exclude: Option<Uuid>,
) -> AppResult<()> {
    let taken = records.iter().any(|record| {
        record.numero_serie.as_deref() == Some(serial) && Some(record.id) != exclude
    });

    if taken {
        Err(AppError::duplicate_field(
            "numero_serie",
            format!("Serial number {} is already registered", serial),
        ))
    } else {
        Ok(())
    }
}

/// Normalize `input` in place and check it against the catalog. Uniqueness
/// is checked separately because it needs the current collection.
pub fn prepare_input(input: &mut EquipmentInput, catalog: &EquipmentCatalog) -> AppResult<()> {
    input.numero_serie = normalize_serial_number(&input.numero_serie);
    input.bureau = input.bureau.trim().to_string();

    input.validate()?;
    validate_serial_number(&input.numero_serie)?;

    catalog.check_combination(&input.equipment_type, &input.marque, &input.modele)?;

    if !catalog.has_direction(&input.direction) {
        return Err(AppError::invalid_field(
            "direction",
            format!("Unknown direction '{}'", input.direction),
        ));
    }

    if EquipmentStatus::from_label(&input.statut).is_none() {
        return Err(AppError::invalid_field(
            "statut",
            format!("Unknown status '{}'", input.statut),
        ));
    }

    if parse_day(&input.date).is_none() {
        return Err(AppError::invalid_field(
            "date",
            format!("'{}' is not a valid date", input.date),
        ));
    }

    Ok(())
}
