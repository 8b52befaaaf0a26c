//! Repository for the `zones` table.

use resman_core::types::DbId;
use sqlx::PgPool;

use crate::models::zone::{CreateZone, UpdateZone, Zone};
use crate::patch::Patch;

const COLUMNS: &str = "id, name, description";

pub struct ZoneRepo;

impl ZoneRepo {
    pub async fn create(pool: &PgPool, input: &CreateZone) -> Result<Zone, sqlx::Error> {
        let query = format!(
            "INSERT INTO zones (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Zone>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Zone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM zones WHERE id = $1");
        sqlx::query_as::<_, Zone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Zone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM zones ORDER BY id");
        sqlx::query_as::<_, Zone>(&query).fetch_all(pool).await
    }

    /// Update a zone. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateZone,
    ) -> Result<Option<Zone>, sqlx::Error> {
        let mut patch = Patch::new("zones");
        patch
            .set("name", input.name.as_deref())
            .set("description", input.description.as_deref());

        match patch.finish(id, COLUMNS) {
            Some(mut builder) => builder.build_query_as::<Zone>().fetch_optional(pool).await,
            None => Self::find_by_id(pool, id).await,
        }
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM zones WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
