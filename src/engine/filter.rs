//! Multi-field equipment filtering

use super::dates::record_day;
use crate::models::{Equipment, EquipmentFilter};

/// A criterion that is unset or empty matches everything
fn criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn matches_exact(query: &Option<String>, value: &Option<String>) -> bool {
    match criterion(query) {
        None => true,
        Some(q) => value.as_deref() == Some(q),
    }
}

fn matches_contains(query: Option<&str>, value: &Option<String>) -> bool {
    match query {
        None => true,
        Some(q) => value.as_deref().unwrap_or("").contains(q),
    }
}

fn matches_dates(filter: &EquipmentFilter, record: &Equipment) -> bool {
    if filter.date.is_none() && filter.start_date.is_none() && filter.end_date.is_none() {
        return true;
    }

    let Some(day) = record_day(record) else {
        return false;
    };

    let exact = filter.date.map_or(true, |d| day == d);
    let after_start = filter.start_date.map_or(true, |start| day >= start);
    let before_end = filter.end_date.map_or(true, |end| day <= end);

    exact && after_start && before_end
}

impl EquipmentFilter {
    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        criterion(&self.statut).is_none()
            && criterion(&self.equipment_type).is_none()
            && criterion(&self.marque).is_none()
            && criterion(&self.modele).is_none()
            && criterion(&self.direction).is_none()
            && criterion(&self.numero_serie).is_none()
            && criterion(&self.bureau).is_none()
            && self.date.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Whether a single record satisfies every set criterion
    pub fn matches(&self, record: &Equipment) -> bool {
        let serial_query = criterion(&self.numero_serie).map(str::to_uppercase);

        matches_exact(&self.statut, &record.statut)
            && matches_exact(&self.equipment_type, &record.equipment_type)
            && matches_exact(&self.marque, &record.marque)
            && matches_exact(&self.modele, &record.modele)
            && matches_exact(&self.direction, &record.direction)
            && matches_contains(serial_query.as_deref(), &record.numero_serie)
            && matches_contains(criterion(&self.bureau), &record.bureau)
            && matches_dates(self, record)
    }
}

/// Subset of `records` matching every criterion of `filter`, in input order
pub fn filter_equipment(records: &[Equipment], filter: &EquipmentFilter) -> Vec<Equipment> {
    if filter.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}
