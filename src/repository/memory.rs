//! In-process equipment store

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::EquipmentStore;
use crate::{
    engine::sort_newest_first,
    error::{AppError, AppResult},
    models::{Equipment, EquipmentInput},
};

/// Equipment kept in a map guarded by an async lock. Writes are serialized
/// by the lock; the serial-number uniqueness of the SQL schema is enforced
/// here as well.
#[derive(Default)]
pub struct MemoryEquipmentStore {
    records: RwLock<IndexMap<Uuid, Equipment>>,
}

impl MemoryEquipmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `records`
    pub fn with_records(records: Vec<Equipment>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.id, r)).collect()),
        }
    }
}

fn serial_taken(
    records: &IndexMap<Uuid, Equipment>,
    serial: &str,
    exclude: Option<Uuid>,
) -> bool {
    !serial.is_empty()
        && records
            .values()
            .any(|r| r.numero_serie.as_deref() == Some(serial) && Some(r.id) != exclude)
}

fn duplicate(serial: &str) -> AppError {
    AppError::duplicate_field(
        "numero_serie",
        format!("Serial number {} is already registered", serial),
    )
}

fn apply(record: &mut Equipment, data: &EquipmentInput) {
    record.equipment_type = Some(data.equipment_type.clone());
    record.marque = Some(data.marque.clone());
    record.modele = Some(data.modele.clone());
    record.direction = Some(data.direction.clone());
    record.bureau = Some(data.bureau.clone());
    record.numero_serie = Some(data.numero_serie.clone());
    record.statut = Some(data.statut.clone());
    record.date = Some(data.date.clone());
}

#[async_trait]
impl EquipmentStore for MemoryEquipmentStore {
    async fn list_all(&self) -> AppResult<Vec<Equipment>> {
        let records = self.records.read().await;
        // Reverse insertion order so equal timestamps still list the latest first
        Ok(sort_newest_first(records.values().rev().cloned().collect()))
    }

    async fn get(&self, id: Uuid) -> AppResult<Equipment> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    async fn create(&self, data: &EquipmentInput) -> AppResult<Equipment> {
        let mut records = self.records.write().await;
        if serial_taken(&records, &data.numero_serie, None) {
            return Err(duplicate(&data.numero_serie));
        }

        let mut record = Equipment {
            id: Uuid::new_v4(),
            equipment_type: None,
            marque: None,
            modele: None,
            direction: None,
            bureau: None,
            numero_serie: None,
            statut: None,
            date: None,
            date_added: Utc::now(),
        };
        apply(&mut record, data);
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, data: &EquipmentInput) -> AppResult<Equipment> {
        let mut records = self.records.write().await;
        if serial_taken(&records, &data.numero_serie, Some(id)) {
            return Err(duplicate(&data.numero_serie));
        }

        let record = records
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;
        apply(record, data);
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.records
            .write()
            .await
            .shift_remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(serial: &str) -> EquipmentInput {
        EquipmentInput {
            equipment_type: "Scanner".into(),
            marque: "Epson".into(),
            modele: "Perfection V39".into(),
            direction: "DAF".into(),
            bureau: "12".into(),
            numero_serie: serial.into(),
            statut: "Fonctionnel".into(),
            date: "2024-05-02".into(),
        }
    }

    #[tokio::test]
    async fn test_create_update_keeps_identity() {
        let store = MemoryEquipmentStore::new();
        let created = store.create(&input("SC1")).await.unwrap();

        let mut changed = input("SC1");
        changed.statut = "Réformé en stock".into();
        let updated = store.update(created.id, &changed).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date_added, created.date_added);
        assert_eq!(updated.statut.as_deref(), Some("Réformé en stock"));
    }

    #[tokio::test]
    async fn test_duplicate_serial_rejected() {
        let store = MemoryEquipmentStore::new();
        store.create(&input("SC1")).await.unwrap();
        let other = store.create(&input("SC2")).await.unwrap();

        assert!(matches!(
            store.create(&input("SC1")).await,
            Err(AppError::DuplicateField { .. })
        ));
        assert!(matches!(
            store.update(other.id, &input("SC1")).await,
            Err(AppError::DuplicateField { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_newest_first_and_delete() {
        let store = MemoryEquipmentStore::new();
        let first = store.create(&input("A1")).await.unwrap();
        let second = store.create(&input("A2")).await.unwrap();

        let ids: Vec<Uuid> = store.list_all().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        store.delete(first.id).await.unwrap();
        assert!(matches!(store.get(first.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.delete(first.id).await, Err(AppError::NotFound(_))));
    }
}
