//! Inventory assistant service

use std::sync::Arc;

use crate::{
    assistant::{self, AssistantReply},
    catalog::EquipmentCatalog,
    error::{AppError, AppResult},
    repository::Repository,
};

#[derive(Clone)]
pub struct AssistantService {
    repository: Repository,
    catalog: Arc<EquipmentCatalog>,
}

impl AssistantService {
    pub fn new(repository: Repository, catalog: Arc<EquipmentCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Answer a free-text question over the current inventory
    pub async fn ask(&self, question: &str) -> AppResult<AssistantReply> {
        if question.trim().is_empty() {
            return Err(AppError::Validation("Question cannot be empty".to_string()));
        }

        let snapshot = self.repository.equipment.list_all().await?;
        let reply = assistant::answer(question, &snapshot, &self.catalog);
        tracing::debug!("Assistant intent {:?} for question '{}'", reply.intent, question);
        Ok(reply)
    }
}
