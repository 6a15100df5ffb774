//! Business logic services

pub mod assistant;
pub mod equipment;
pub mod stats;

use std::sync::Arc;

use crate::{catalog::EquipmentCatalog, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub stats: stats::StatsService,
    pub assistant: assistant::AssistantService,
    pub catalog: Arc<EquipmentCatalog>,
}

impl Services {
    /// Create all services over the given repository and catalog
    pub fn new(repository: Repository, catalog: Arc<EquipmentCatalog>) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone(), catalog.clone()),
            stats: stats::StatsService::new(repository.clone()),
            assistant: assistant::AssistantService::new(repository, catalog.clone()),
            catalog,
        }
    }
}
