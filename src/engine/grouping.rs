//! Grouping of equipment by direction/bureau, by date bucket and by field

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::Datelike;
use indexmap::IndexMap;

use super::dates::record_day;
use crate::models::{DatePeriod, Equipment, EquipmentField, EquipmentStatus};

/// Per-direction counters with the records of each bureau
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionStats {
    pub total: usize,
    pub functional_count: usize,
    pub reformed_in_office_count: usize,
    pub reformed_in_stock_count: usize,
    /// Bureau label -> records, in first-seen order
    pub bureaux: IndexMap<String, Vec<Equipment>>,
}

/// Direction -> stats, in first-seen order
pub type DirectionGrouping = IndexMap<String, DirectionStats>;

impl DirectionStats {
    fn record(&mut self, bureau: &str, record: &Equipment) {
        self.total += 1;
        match record.statut.as_deref().and_then(EquipmentStatus::from_label) {
            Some(EquipmentStatus::Functional) => self.functional_count += 1,
            Some(EquipmentStatus::ReformedInOffice) => self.reformed_in_office_count += 1,
            Some(EquipmentStatus::ReformedInStock) => self.reformed_in_stock_count += 1,
            None => {}
        }
        self.bureaux
            .entry(bureau.to_string())
            .or_default()
            .push(record.clone());
    }

    /// Records in either decommissioned state
    pub fn reformed_count(&self) -> usize {
        self.reformed_in_office_count + self.reformed_in_stock_count
    }

    /// Reform rate as an exact fraction; an empty direction has rate 0/1
    fn reform_fraction(&self) -> (u128, u128) {
        if self.total == 0 {
            (0, 1)
        } else {
            (self.reformed_count() as u128, self.total as u128)
        }
    }

    /// Fraction of reformed records, 0.0 for an empty direction
    pub fn reform_rate(&self) -> f64 {
        let (num, den) = self.reform_fraction();
        num as f64 / den as f64
    }

    /// Compare reform rates without going through floating point
    pub fn cmp_reform_rate(&self, other: &DirectionStats) -> Ordering {
        let (a_num, a_den) = self.reform_fraction();
        let (b_num, b_den) = other.reform_fraction();
        (a_num * b_den).cmp(&(b_num * a_den))
    }
}

/// Non-blank value of an optional field
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Group records by direction then bureau. Records missing either are left
/// out of every counter.
pub fn group_by_direction_and_bureau(records: &[Equipment]) -> DirectionGrouping {
    let mut grouping = DirectionGrouping::new();

    for record in records {
        let (Some(direction), Some(bureau)) = (present(&record.direction), present(&record.bureau))
        else {
            continue;
        };
        grouping
            .entry(direction.to_string())
            .or_default()
            .record(bureau, record);
    }

    grouping
}

/// Directions by descending reform rate, ties by ascending name
pub fn rank_directions(grouping: &DirectionGrouping) -> Vec<(&str, &DirectionStats)> {
    let mut ranked: Vec<(&str, &DirectionStats)> = grouping
        .iter()
        .map(|(name, stats)| (name.as_str(), stats))
        .collect();

    ranked.sort_by(|(a_name, a), (b_name, b)| {
        b.cmp_reform_rate(a).then_with(|| a_name.cmp(b_name))
    });
    ranked
}

/// Count records per year, month (`"2024-3"`) or ISO day (`"2024-03-01"`).
/// Records without a parseable date are skipped. Buckets come out in
/// chronological order.
pub fn group_by_date(records: &[Equipment], period: DatePeriod) -> IndexMap<String, usize> {
    let mut buckets: BTreeMap<(i32, u32, u32), usize> = BTreeMap::new();

    for day in records.iter().filter_map(record_day) {
        let key = match period {
            DatePeriod::Year => (day.year(), 0, 0),
            DatePeriod::Month => (day.year(), day.month(), 0),
            DatePeriod::Day => (day.year(), day.month(), day.day()),
        };
        *buckets.entry(key).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month, day), count)| {
            let label = match period {
                DatePeriod::Year => format!("{:04}", year),
                DatePeriod::Month => format!("{}-{}", year, month),
                DatePeriod::Day => format!("{:04}-{:02}-{:02}", year, month, day),
            };
            (label, count)
        })
        .collect()
}

/// Count records per value of `field`, in first-seen order. Records where
/// the field is missing or blank are skipped.
pub fn tally_by(records: &[Equipment], field: EquipmentField) -> IndexMap<String, usize> {
    let mut tally = IndexMap::new();
    for record in records {
        if let Some(value) = record.field(field).filter(|v| !v.trim().is_empty()) {
            *tally.entry(value.to_string()).or_insert(0) += 1;
        }
    }
    tally
}

/// Count per brand
pub fn by_brand(records: &[Equipment]) -> IndexMap<String, usize> {
    tally_by(records, EquipmentField::Marque)
}

/// Count per equipment type
pub fn by_category(records: &[Equipment]) -> IndexMap<String, usize> {
    tally_by(records, EquipmentField::Type)
}

/// A bureau found by [`search_bureau`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BureauMatch<'a> {
    pub direction: &'a str,
    pub bureau: &'a str,
    pub records: &'a [Equipment],
}

/// First bureau whose label contains `query` (case-insensitive). Directions
/// are visited in ranked order so the answer does not depend on how the
/// grouping was built.
pub fn search_bureau<'a>(grouping: &'a DirectionGrouping, query: &str) -> Option<BureauMatch<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    rank_directions(grouping)
        .into_iter()
        .find_map(|(direction, stats)| {
            stats
                .bureaux
                .iter()
                .find(|(bureau, _)| bureau.to_lowercase().contains(&needle))
                .map(|(bureau, records)| BureauMatch {
                    direction,
                    bureau: bureau.as_str(),
                    records: records.as_slice(),
                })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::{placed, RecordBuilder};

    #[test]
    fn test_direction_scenario() {
        let records = vec![
            placed("DSI", "101", "Fonctionnel"),
            placed("DSI", "101", "Réformé en bureau"),
            placed("DRH", "5", "Fonctionnel"),
        ];
        let grouping = group_by_direction_and_bureau(&records);

        let dsi = &grouping["DSI"];
        assert_eq!(dsi.total, 2);
        assert_eq!(dsi.functional_count, 1);
        assert_eq!(dsi.reformed_in_office_count, 1);
        assert_eq!(dsi.reformed_in_stock_count, 0);
        assert_eq!(dsi.bureaux["101"].len(), 2);

        let drh = &grouping["DRH"];
        assert_eq!(drh.total, 1);
        assert_eq!(drh.functional_count, 1);

        let ranked: Vec<&str> = rank_directions(&grouping).into_iter().map(|(d, _)| d).collect();
        assert_eq!(ranked, vec!["DSI", "DRH"]);
        assert_eq!(dsi.reform_rate(), 0.5);
        assert_eq!(drh.reform_rate(), 0.0);
    }

    #[test]
    fn test_missing_direction_or_bureau_excluded() {
        let mut no_bureau = placed("DSI", "x", "Fonctionnel");
        no_bureau.bureau = None;
        let blank_direction = placed("  ", "12", "Fonctionnel");

        let grouping = group_by_direction_and_bureau(&[
            no_bureau,
            blank_direction,
            placed("DAF", "3", "Fonctionnel"),
        ]);
        assert_eq!(grouping.len(), 1);
        assert_eq!(grouping["DAF"].total, 1);
    }

    #[test]
    fn test_unknown_status_counts_in_total_only() {
        let grouping = group_by_direction_and_bureau(&[
            placed("DSI", "1", "En réparation"),
            placed("DSI", "1", "Réformé en stock"),
        ]);
        let dsi = &grouping["DSI"];
        assert_eq!(dsi.total, 2);
        assert_eq!(
            dsi.functional_count + dsi.reformed_in_office_count + dsi.reformed_in_stock_count,
            1
        );
    }

    #[test]
    fn test_ranking_ties_alphabetical() {
        let grouping = group_by_direction_and_bureau(&[
            placed("DRH", "1", "Fonctionnel"),
            placed("DAF", "1", "Fonctionnel"),
            placed("DSI", "1", "Réformé en stock"),
            placed("DSI", "2", "Fonctionnel"),
            placed("DCOM", "1", "Réformé en bureau"),
            placed("DCOM", "1", "Fonctionnel"),
        ]);
        let ranked: Vec<&str> = rank_directions(&grouping).into_iter().map(|(d, _)| d).collect();
        assert_eq!(ranked, vec!["DCOM", "DSI", "DAF", "DRH"]);
    }

    #[test]
    fn test_empty_direction_has_zero_rate() {
        let empty = DirectionStats::default();
        assert_eq!(empty.reform_rate(), 0.0);
        assert_eq!(empty.cmp_reform_rate(&DirectionStats::default()), Ordering::Equal);
    }

    #[test]
    fn test_group_by_date_year_and_month() {
        let records = vec![
            RecordBuilder::blank().date("2024-03-01").build(),
            RecordBuilder::blank().date("2024-03-15").build(),
            RecordBuilder::blank().date("2023-12-01").build(),
        ];

        let years = group_by_date(&records, DatePeriod::Year);
        assert_eq!(years.get("2024"), Some(&2));
        assert_eq!(years.get("2023"), Some(&1));
        assert_eq!(years.keys().collect::<Vec<_>>(), vec!["2023", "2024"]);

        let months = group_by_date(&records, DatePeriod::Month);
        assert_eq!(months.get("2024-3"), Some(&2));
        assert_eq!(months.get("2023-12"), Some(&1));
    }

    #[test]
    fn test_year_labels_are_four_digits() {
        let records = vec![RecordBuilder::blank().date("0999-05-01").build()];
        let years = group_by_date(&records, DatePeriod::Year);
        assert_eq!(years.keys().collect::<Vec<_>>(), vec!["0999"]);
    }

    #[test]
    fn test_group_by_day_normalizes_and_skips_invalid() {
        let records = vec![
            RecordBuilder::blank().date("2024-03-01").build(),
            RecordBuilder::blank().date("2024-03-01T16:45:00+02:00").build(),
            RecordBuilder::blank().date("garbage").build(),
            RecordBuilder::blank().build(),
        ];
        let days = group_by_date(&records, DatePeriod::Day);
        assert_eq!(days.len(), 1);
        assert_eq!(days.get("2024-03-01"), Some(&2));
    }

    #[test]
    fn test_tallies_skip_missing() {
        let records = vec![
            RecordBuilder::new("Imprimante", "HP").build(),
            RecordBuilder::new("Écran", "Dell").build(),
            RecordBuilder::new("Imprimante", "HP").build(),
            RecordBuilder::blank().build(),
        ];
        let brands = by_brand(&records);
        assert_eq!(brands.get("HP"), Some(&2));
        assert_eq!(brands.get("Dell"), Some(&1));
        assert_eq!(brands.len(), 2);

        let categories = by_category(&records);
        assert_eq!(categories.keys().collect::<Vec<_>>(), vec!["Imprimante", "Écran"]);
    }

    #[test]
    fn test_search_bureau_case_insensitive_in_ranked_order() {
        let grouping = group_by_direction_and_bureau(&[
            placed("DAF", "Salle Informatique", "Fonctionnel"),
            placed("DSI", "Salle serveurs", "Réformé en stock"),
        ]);

        let found = search_bureau(&grouping, "SALLE").unwrap();
        assert_eq!(found.direction, "DSI");
        assert_eq!(found.bureau, "Salle serveurs");
        assert_eq!(found.records.len(), 1);

        let found = search_bureau(&grouping, "informatique").unwrap();
        assert_eq!(found.direction, "DAF");

        assert!(search_bureau(&grouping, "cuisine").is_none());
        assert!(search_bureau(&grouping, "   ").is_none());
        assert!(search_bureau(&DirectionGrouping::new(), "salle").is_none());
    }
}
