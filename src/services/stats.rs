//! Statistics service

use crate::{
    api::stats::{
        BureauSearchResult, BureauSummary, CategoryShare, DashboardSummary, DirectionSummary,
        StatEntry,
    },
    engine::{self, DirectionStats, Page, DIRECTION_STATS_PAGE_SIZE},
    error::{AppError, AppResult},
    models::{DatePeriod, EquipmentField},
    repository::Repository,
};

/// Categories shown on the dashboard
const DASHBOARD_TOP_CATEGORIES: usize = 3;
/// Latest additions shown on the dashboard
const DASHBOARD_RECENT: usize = 5;

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

fn direction_summary(direction: &str, stats: &DirectionStats) -> DirectionSummary {
    DirectionSummary {
        direction: direction.to_string(),
        total: stats.total,
        functional_count: stats.functional_count,
        reformed_in_office_count: stats.reformed_in_office_count,
        reformed_in_stock_count: stats.reformed_in_stock_count,
        reform_rate_percent: engine::reform_rate_percent(stats),
        bureaux: stats
            .bureaux
            .iter()
            .map(|(bureau, records)| BureauSummary {
                bureau: bureau.clone(),
                count: records.len(),
            })
            .collect(),
    }
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Figures of the dashboard home page
    pub async fn dashboard(&self) -> AppResult<DashboardSummary> {
        let snapshot = self.repository.equipment.list_all().await?;
        let total = snapshot.len();

        let categories = engine::by_category(&snapshot);
        let top_categories = engine::top_n(&categories, DASHBOARD_TOP_CATEGORIES)
            .into_iter()
            .map(|(label, count)| CategoryShare {
                percent: engine::percentage(count, total),
                label,
                count,
            })
            .collect();

        let bureau_count = engine::unique_bureau_count(&snapshot);
        let direction_count = engine::group_by_direction_and_bureau(&snapshot).len();

        let recent = engine::sort_newest_first(snapshot.clone())
            .into_iter()
            .take(DASHBOARD_RECENT)
            .collect();

        tracing::debug!("Dashboard computed over {} records", total);

        Ok(DashboardSummary {
            total_equipment: total,
            status: engine::status_breakdown(&snapshot),
            top_categories,
            direction_count,
            bureau_count,
            average_per_bureau: engine::average_per_bureau(total, bureau_count),
            recent,
        })
    }

    /// Directions ranked by reform rate, one page at a time
    pub async fn directions(&self, page: usize) -> AppResult<Page<DirectionSummary>> {
        let snapshot = self.repository.equipment.list_all().await?;
        let grouping = engine::group_by_direction_and_bureau(&snapshot);

        let ranked: Vec<DirectionSummary> = engine::rank_directions(&grouping)
            .into_iter()
            .map(|(direction, stats)| direction_summary(direction, stats))
            .collect();

        Ok(engine::paginate(&ranked, DIRECTION_STATS_PAGE_SIZE, page))
    }

    /// Record counts per year, month or day of acquisition
    pub async fn timeline(&self, period: DatePeriod) -> AppResult<Vec<StatEntry>> {
        let snapshot = self.repository.equipment.list_all().await?;
        Ok(engine::group_by_date(&snapshot, period)
            .into_iter()
            .map(|(label, value)| StatEntry { label, value })
            .collect())
    }

    /// Record counts per value of a field
    pub async fn tally(&self, field: EquipmentField) -> AppResult<Vec<StatEntry>> {
        let snapshot = self.repository.equipment.list_all().await?;
        Ok(engine::tally_by(&snapshot, field)
            .into_iter()
            .map(|(label, value)| StatEntry { label, value })
            .collect())
    }

    /// First bureau whose label contains `query`
    pub async fn search_bureau(&self, query: &str) -> AppResult<BureauSearchResult> {
        let snapshot = self.repository.equipment.list_all().await?;
        let grouping = engine::group_by_direction_and_bureau(&snapshot);

        let found = engine::search_bureau(&grouping, query)
            .ok_or_else(|| AppError::NotFound(format!("No bureau matching '{}'", query.trim())))?;

        Ok(BureauSearchResult {
            direction: found.direction.to_string(),
            bureau: found.bureau.to_string(),
            count: found.records.len(),
            equipment: found.records.to_vec(),
        })
    }
}
