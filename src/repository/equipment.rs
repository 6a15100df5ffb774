//! Equipment repository for PostgreSQL

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::EquipmentStore;
use crate::{
    error::{AppError, AppResult},
    models::{Equipment, EquipmentInput},
};

const COLUMNS: &str = "id, equipment_type, marque, modele, direction, bureau, \
                       numero_serie, statut, date, date_added";

/// Map a unique-index violation on the serial number to a field error
fn map_write_error(err: sqlx::Error, serial: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::duplicate_field(
            "numero_serie",
            format!("Serial number {} is already registered", serial),
        ),
        _ => AppError::Database(err),
    }
}

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EquipmentStore for EquipmentRepository {
    async fn list_all(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {} FROM equipment ORDER BY date_added DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(&format!("SELECT {} FROM equipment WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    async fn create(&self, data: &EquipmentInput) -> AppResult<Equipment> {
        let query = format!(
            r#"
            INSERT INTO equipment (id, equipment_type, marque, modele, direction, bureau,
                                   numero_serie, statut, date, date_added)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            COLUMNS
        );

        sqlx::query_as::<_, Equipment>(&query)
            .bind(Uuid::new_v4())
            .bind(&data.equipment_type)
            .bind(&data.marque)
            .bind(&data.modele)
            .bind(&data.direction)
            .bind(&data.bureau)
            .bind(&data.numero_serie)
            .bind(&data.statut)
            .bind(&data.date)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &data.numero_serie))
    }

    async fn update(&self, id: Uuid, data: &EquipmentInput) -> AppResult<Equipment> {
        // date_added is never rewritten
        let query = format!(
            r#"
            UPDATE equipment
            SET equipment_type = $2, marque = $3, modele = $4, direction = $5,
                bureau = $6, numero_serie = $7, statut = $8, date = $9
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        );

        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .bind(&data.equipment_type)
            .bind(&data.marque)
            .bind(&data.modele)
            .bind(&data.direction)
            .bind(&data.bureau)
            .bind(&data.numero_serie)
            .bind(&data.statut)
            .bind(&data.date)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &data.numero_serie))?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
