//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assistant, catalog, equipment, health, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Parc API",
        version = "0.4.0",
        description = "IT equipment inventory REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Catalog
        catalog::get_catalog,
        catalog::update_selection,
        // Stats
        stats::get_dashboard,
        stats::get_direction_stats,
        stats::get_timeline,
        stats::get_tally,
        stats::search_bureau,
        // Assistant
        assistant::ask,
    ),
    components(
        schemas(
            // Equipment
            crate::models::Equipment,
            crate::models::EquipmentInput,
            crate::models::UpdateEquipment,
            crate::models::EquipmentFilter,
            crate::models::EquipmentStatus,
            crate::models::DateSort,
            crate::models::DatePeriod,
            crate::models::EquipmentField,
            crate::api::EquipmentPage,
            // Catalog
            crate::catalog::EquipmentCatalog,
            crate::catalog::Selection,
            crate::catalog::SelectionField,
            catalog::SelectionRequest,
            catalog::SelectionResponse,
            // Stats
            crate::engine::StatusBreakdown,
            crate::engine::StatusShare,
            stats::StatEntry,
            stats::CategoryShare,
            stats::DashboardSummary,
            stats::DirectionSummary,
            stats::BureauSummary,
            stats::BureauSearchResult,
            crate::api::DirectionStatsPage,
            // Assistant
            assistant::AskRequest,
            crate::assistant::AssistantReply,
            crate::assistant::Intent,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment inventory"),
        (name = "catalog", description = "Types, brands, models and directions"),
        (name = "stats", description = "Statistics"),
        (name = "assistant", description = "Inventory assistant")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
