//! Derived statistics: percentages, rankings, averages

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use super::grouping::DirectionStats;
use crate::models::{Equipment, EquipmentStatus};

/// `round(count / total * 100)`, 0 when `total` is 0
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// The `n` largest entries of a tally. Equal counts keep their first-seen order.
pub fn top_n(tally: &IndexMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = tally
        .iter()
        .map(|(label, count)| (label.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// Distinct non-blank bureau labels
pub fn unique_bureau_count(records: &[Equipment]) -> usize {
    records
        .iter()
        .filter_map(|r| r.bureau.as_deref())
        .filter(|b| !b.trim().is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// `round(total / bureaux)`, 0 when there is no bureau
pub fn average_per_bureau(total: usize, bureaux: usize) -> u64 {
    if bureaux == 0 {
        return 0;
    }
    (total as f64 / bureaux as f64).round() as u64
}

/// Percentage of a direction's records that are reformed
pub fn reform_rate_percent(stats: &DirectionStats) -> u32 {
    (stats.reform_rate() * 100.0).round() as u32
}

/// Count and share of one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusShare {
    pub count: usize,
    pub percent: u32,
}

/// Status counts over a whole list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub total: usize,
    pub functional: StatusShare,
    pub reformed_in_office: StatusShare,
    pub reformed_in_stock: StatusShare,
    /// Records whose status is missing or not one of the known labels
    pub other: usize,
}

pub fn status_breakdown(records: &[Equipment]) -> StatusBreakdown {
    let total = records.len();
    let (mut functional, mut in_office, mut in_stock) = (0, 0, 0);

    for status in records
        .iter()
        .filter_map(|r| r.statut.as_deref().and_then(EquipmentStatus::from_label))
    {
        match status {
            EquipmentStatus::Functional => functional += 1,
            EquipmentStatus::ReformedInOffice => in_office += 1,
            EquipmentStatus::ReformedInStock => in_stock += 1,
        }
    }

    let share = |count| StatusShare {
        count,
        percent: percentage(count, total),
    };

    StatusBreakdown {
        total,
        functional: share(functional),
        reformed_in_office: share(in_office),
        reformed_in_stock: share(in_stock),
        other: total - functional - in_office - in_stock,
    }
}
