//! Statistics endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    engine::StatusBreakdown,
    error::AppResult,
    models::{DatePeriod, Equipment, EquipmentField},
};

use super::DirectionStatsPage;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: usize,
}

/// One of the most represented equipment types
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryShare {
    pub label: String,
    pub count: usize,
    /// Share of the whole inventory, rounded
    pub percent: u32,
}

/// Dashboard figures
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Number of records in the inventory
    pub total_equipment: usize,
    /// Counts and shares per status
    pub status: StatusBreakdown,
    /// Three most represented types
    pub top_categories: Vec<CategoryShare>,
    /// Directions holding at least one placed record
    pub direction_count: usize,
    /// Distinct non-blank office labels
    pub bureau_count: usize,
    /// Records per office, rounded
    pub average_per_bureau: u64,
    /// Latest additions, newest first
    pub recent: Vec<Equipment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BureauSummary {
    pub bureau: String,
    pub count: usize,
}

/// Status counters of one direction
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectionSummary {
    pub direction: String,
    pub total: usize,
    pub functional_count: usize,
    pub reformed_in_office_count: usize,
    pub reformed_in_stock_count: usize,
    /// Reformed share, rounded percentage
    pub reform_rate_percent: u32,
    /// Offices in first-seen order
    pub bureaux: Vec<BureauSummary>,
}

/// First office matching a search
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BureauSearchResult {
    pub direction: String,
    pub bureau: String,
    pub count: usize,
    pub equipment: Vec<Equipment>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DirectionStatsQuery {
    /// Page number (default: 1, 5 directions per page)
    #[serde(default, deserialize_with = "crate::models::empty_as_none")]
    pub page: Option<usize>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimelineQuery {
    /// Bucket size (default: year)
    pub period: Option<DatePeriod>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TallyQuery {
    /// Field whose values are counted
    pub field: EquipmentField,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BureauSearchQuery {
    /// Case-insensitive fragment of the office label
    pub q: String,
}

/// Dashboard summary
#[utoipa::path(
    get,
    path = "/stats/dashboard",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard figures", body = DashboardSummary)
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DashboardSummary>> {
    let summary = state.services.stats.dashboard().await?;
    Ok(Json(summary))
}

/// Directions ranked by reform rate
#[utoipa::path(
    get,
    path = "/stats/directions",
    tag = "stats",
    params(DirectionStatsQuery),
    responses(
        (status = 200, description = "Page of direction statistics", body = DirectionStatsPage)
    )
)]
pub async fn get_direction_stats(
    State(state): State<crate::AppState>,
    query: Result<Query<DirectionStatsQuery>, QueryRejection>,
) -> AppResult<Json<DirectionStatsPage>> {
    let Query(query) = query?;
    let page = state.services.stats.directions(query.page.unwrap_or(1)).await?;
    Ok(Json(page.into()))
}

/// Record counts per acquisition period, chronological
#[utoipa::path(
    get,
    path = "/stats/timeline",
    tag = "stats",
    params(TimelineQuery),
    responses(
        (status = 200, description = "Counts per period", body = Vec<StatEntry>)
    )
)]
pub async fn get_timeline(
    State(state): State<crate::AppState>,
    query: Result<Query<TimelineQuery>, QueryRejection>,
) -> AppResult<Json<Vec<StatEntry>>> {
    let Query(query) = query?;
    let entries = state
        .services
        .stats
        .timeline(query.period.unwrap_or_default())
        .await?;
    Ok(Json(entries))
}

/// Record counts per value of a field
#[utoipa::path(
    get,
    path = "/stats/tally",
    tag = "stats",
    params(TallyQuery),
    responses(
        (status = 200, description = "Counts per value", body = Vec<StatEntry>),
        (status = 400, description = "Unknown field", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_tally(
    State(state): State<crate::AppState>,
    query: Result<Query<TallyQuery>, QueryRejection>,
) -> AppResult<Json<Vec<StatEntry>>> {
    let Query(query) = query?;
    let entries = state.services.stats.tally(query.field).await?;
    Ok(Json(entries))
}

/// Find the first office whose label contains the query
#[utoipa::path(
    get,
    path = "/stats/bureaux/search",
    tag = "stats",
    params(BureauSearchQuery),
    responses(
        (status = 200, description = "Matching office", body = BureauSearchResult),
        (status = 404, description = "No office matches", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_bureau(
    State(state): State<crate::AppState>,
    query: Result<Query<BureauSearchQuery>, QueryRejection>,
) -> AppResult<Json<BureauSearchResult>> {
    let Query(query) = query?;
    let result = state.services.stats.search_bureau(&query.q).await?;
    Ok(Json(result))
}
