//! Equipment service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    catalog::EquipmentCatalog,
    engine::{self, Page, EQUIPMENT_PAGE_SIZE},
    error::{AppError, AppResult},
    models::{DateSort, Equipment, EquipmentFilter, EquipmentInput, ListParams, UpdateEquipment},
    repository::Repository,
    validation,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    catalog: Arc<EquipmentCatalog>,
}

impl EquipmentService {
    pub fn new(repository: Repository, catalog: Arc<EquipmentCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Filtered and ordered list. Without a date sort the store order
    /// (newest `dateAdded` first) is kept.
    pub async fn list(
        &self,
        filter: &EquipmentFilter,
        sort: DateSort,
    ) -> AppResult<Vec<Equipment>> {
        let snapshot = self.repository.equipment.list_all().await?;
        let filtered = engine::filter_equipment(&snapshot, filter);
        tracing::debug!(
            "Equipment filter kept {}/{} records",
            filtered.len(),
            snapshot.len()
        );
        Ok(engine::sort_by_date(filtered, sort))
    }

    /// One page of the equipment table
    pub async fn list_page(
        &self,
        filter: &EquipmentFilter,
        params: &ListParams,
    ) -> AppResult<Page<Equipment>> {
        let records = self.list(filter, params.date_sort).await?;
        Ok(engine::paginate(
            &records,
            EQUIPMENT_PAGE_SIZE,
            params.page.unwrap_or(1),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Equipment> {
        self.repository.equipment.get(id).await
    }

    pub async fn create(&self, mut data: EquipmentInput) -> AppResult<Equipment> {
        validation::prepare_input(&mut data, &self.catalog)?;

        let snapshot = self.repository.equipment.list_all().await?;
        validation::ensure_unique_serial(&snapshot, &data.numero_serie, None)?;

        let created = self.repository.equipment.create(&data).await?;
        tracing::info!(
            "Equipment created: id={} serial={} direction={}",
            created.id,
            data.numero_serie,
            data.direction
        );
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, data: UpdateEquipment) -> AppResult<Equipment> {
        let existing = self.repository.equipment.get(id).await?;

        if let Some(date_added) = data.date_added {
            if date_added != existing.date_added {
                tracing::warn!("Rejected attempt to change dateAdded of equipment {}", id);
                return Err(AppError::invalid_field(
                    "dateAdded",
                    "The creation date of an equipment cannot be changed",
                ));
            }
        }

        let mut fields = data.fields;
        validation::prepare_input(&mut fields, &self.catalog)?;

        let snapshot = self.repository.equipment.list_all().await?;
        validation::ensure_unique_serial(&snapshot, &fields.numero_serie, Some(id))?;

        let updated = self.repository.equipment.update(id, &fields).await?;
        tracing::info!("Equipment updated: id={} serial={}", id, fields.numero_serie);
        Ok(updated)
    }

    /// Whether the backing store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.equipment.ping().await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.equipment.delete(id).await?;
        tracing::info!("Equipment deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::RecordBuilder;
    use crate::repository::MockEquipmentStore;
    use chrono::{TimeZone, Utc};

    fn input(serial: &str) -> EquipmentInput {
        EquipmentInput {
            equipment_type: "Écran".into(),
            marque: "Dell".into(),
            modele: "P2422H".into(),
            direction: "DRH".into(),
            bureau: "Bureau 5".into(),
            numero_serie: serial.into(),
            statut: "Fonctionnel".into(),
            date: "2024-02-10".into(),
        }
    }

    fn stored(serial: &str) -> Equipment {
        RecordBuilder::new("Écran", "Dell")
            .modele("P2422H")
            .direction("DRH")
            .bureau("Bureau 5")
            .serial(serial)
            .statut("Fonctionnel")
            .date("2024-02-10")
            .build()
    }

    fn service(store: MockEquipmentStore) -> EquipmentService {
        EquipmentService::new(
            Repository::with_store(Arc::new(store)),
            Arc::new(EquipmentCatalog::builtin().unwrap()),
        )
    }

    #[tokio::test]
    async fn test_create_normalizes_serial_before_storing() {
        let mut store = MockEquipmentStore::new();
        store.expect_list_all().returning(|| Ok(vec![]));
        store
            .expect_create()
            .withf(|data| data.numero_serie == "AB12")
            .times(1)
            .returning(|data| Ok(stored(&data.numero_serie)));

        let created = service(store).create(input("ab12")).await.unwrap();
        assert_eq!(created.numero_serie.as_deref(), Some("AB12"));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_serial() {
        let mut store = MockEquipmentStore::new();
        store.expect_list_all().returning(|| Ok(vec![stored("XYZ1")]));
        store.expect_create().never();

        let err = service(store).create(input("xyz1")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateField { field: "numero_serie", .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_serial_without_touching_store() {
        let mut store = MockEquipmentStore::new();
        store.expect_list_all().never();
        store.expect_create().never();

        let err = service(store).create(input("AB-12")).await.unwrap_err();
        assert_eq!(err.field(), Some("numero_serie"));
    }

    #[tokio::test]
    async fn test_update_allows_own_serial() {
        let existing = stored("XYZ1");
        let id = existing.id;

        let mut store = MockEquipmentStore::new();
        let current = existing.clone();
        store.expect_get().returning(move |_| Ok(current.clone()));
        let snapshot = existing.clone();
        store
            .expect_list_all()
            .returning(move || Ok(vec![snapshot.clone()]));
        let updated = existing.clone();
        store
            .expect_update()
            .times(1)
            .returning(move |_, _| Ok(updated.clone()));

        let data = UpdateEquipment {
            fields: input("XYZ1"),
            date_added: Some(existing.date_added),
        };
        let result = service(store).update(id, data).await.unwrap();
        assert_eq!(result.id, id);
    }

    #[tokio::test]
    async fn test_update_rejects_date_added_change() {
        let existing = stored("XYZ1");
        let id = existing.id;

        let mut store = MockEquipmentStore::new();
        store.expect_get().returning(move |_| Ok(existing.clone()));
        store.expect_update().never();

        let data = UpdateEquipment {
            fields: input("XYZ1"),
            date_added: Some(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()),
        };
        let err = service(store).update(id, data).await.unwrap_err();
        assert_eq!(err.field(), Some("dateAdded"));
    }

    #[tokio::test]
    async fn test_list_page_filters_then_paginates() {
        let mut store = MockEquipmentStore::new();
        store.expect_list_all().returning(|| {
            Ok((0..25)
                .map(|i| {
                    let direction = if i % 2 == 0 { "DSI" } else { "DRH" };
                    RecordBuilder::blank()
                        .direction(direction)
                        .serial(&format!("S{}", i))
                        .build()
                })
                .collect())
        });

        let filter = EquipmentFilter {
            direction: Some("DSI".into()),
            ..Default::default()
        };
        let params = ListParams {
            date_sort: DateSort::None,
            page: Some(2),
        };
        let page = service(store).list_page(&filter, &params).await.unwrap();
        assert_eq!(page.total, 13);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].numero_serie.as_deref(), Some("S20"));
    }
}
