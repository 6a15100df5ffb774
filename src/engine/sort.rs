//! Orderings over equipment lists

use std::cmp::Ordering;

use super::dates::record_datetime;
use crate::models::{DateSort, Equipment};

/// Reorder by acquisition date. The sort is stable and records without a
/// valid date are kept last whichever direction is asked for.
pub fn sort_by_date(records: Vec<Equipment>, sort: DateSort) -> Vec<Equipment> {
    if sort == DateSort::None {
        return records;
    }

    let mut keyed: Vec<_> = records
        .into_iter()
        .map(|record| (record_datetime(&record), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match sort {
            DateSort::MostRecent => b.cmp(a),
            _ => a.cmp(b),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Default display order: newest `dateAdded` first
pub fn sort_newest_first(mut records: Vec<Equipment>) -> Vec<Equipment> {
    records.sort_by(|a, b| b.date_added.cmp(&a.date_added));
    records
}
