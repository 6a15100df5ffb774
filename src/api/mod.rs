//! API handlers for the inventory REST endpoints

pub mod assistant;
pub mod catalog;
pub mod equipment;
pub mod health;
pub mod openapi;
pub mod stats;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{engine::Page, models::Equipment, AppState};

use stats::DirectionSummary;

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
#[aliases(EquipmentPage = PaginatedResponse<Equipment>, DirectionStatsPage = PaginatedResponse<DirectionSummary>)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Entries of the requested page
    pub items: Vec<T>,
    /// Number of entries across all pages
    pub total: usize,
    /// Requested page number (1-based)
    pub page: usize,
    /// Entries per page
    pub page_size: usize,
    /// Number of pages, 0 when there is nothing to show
    pub total_pages: usize,
}

impl<T> From<Page<T>> for PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment
        .route(
            "/equipment",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route(
            "/equipment/:id",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        )
        // Catalog
        .route("/catalog", get(catalog::get_catalog))
        .route("/catalog/selection", post(catalog::update_selection))
        // Statistics
        .route("/stats/dashboard", get(stats::get_dashboard))
        .route("/stats/directions", get(stats::get_direction_stats))
        .route("/stats/timeline", get(stats::get_timeline))
        .route("/stats/tally", get(stats::get_tally))
        .route("/stats/bureaux/search", get(stats::search_bureau))
        // Assistant
        .route("/assistant", post(assistant::ask))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
