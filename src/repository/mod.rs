//! Repository layer: the equipment store and its backends

pub mod equipment;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Equipment, EquipmentInput},
};

/// Storage of equipment records.
///
/// Implementations assign `id` and `date_added` on create and never change
/// `date_added` afterwards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    /// Full snapshot, newest `date_added` first
    async fn list_all(&self) -> AppResult<Vec<Equipment>>;

    async fn get(&self, id: Uuid) -> AppResult<Equipment>;

    async fn create(&self, data: &EquipmentInput) -> AppResult<Equipment>;

    async fn update(&self, id: Uuid, data: &EquipmentInput) -> AppResult<Equipment>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Cheap connectivity check used by the readiness endpoint
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding the configured store
#[derive(Clone)]
pub struct Repository {
    pub equipment: Arc<dyn EquipmentStore>,
}

impl Repository {
    /// Repository backed by PostgreSQL
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: Arc::new(equipment::EquipmentRepository::new(pool)),
        }
    }

    /// Repository kept in process memory
    pub fn in_memory() -> Self {
        Self {
            equipment: Arc::new(memory::MemoryEquipmentStore::new()),
        }
    }

    /// Repository over any store implementation
    pub fn with_store(store: Arc<dyn EquipmentStore>) -> Self {
        Self { equipment: store }
    }
}
