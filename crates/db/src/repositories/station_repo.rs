//! Repository for the `stations` table.

use resman_core::types::DbId;
use sqlx::PgPool;

use crate::models::station::{CreateStation, Station, UpdateStation};
use crate::patch::Patch;

const COLUMNS: &str = "id, name, description, project_id";

pub struct StationRepo;

impl StationRepo {
    pub async fn create(pool: &PgPool, input: &CreateStation) -> Result<Station, sqlx::Error> {
        let query = format!(
            "INSERT INTO stations (name, description, project_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Station>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Station>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stations WHERE id = $1");
        sqlx::query_as::<_, Station>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Station>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stations ORDER BY id");
        sqlx::query_as::<_, Station>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStation,
    ) -> Result<Option<Station>, sqlx::Error> {
        let mut patch = Patch::new("stations");
        patch
            .set("name", input.name.as_deref())
            .set("description", input.description.as_deref())
            .set("project_id", input.project_id);

        match patch.finish(id, COLUMNS) {
            Some(mut builder) => builder.build_query_as::<Station>().fetch_optional(pool).await,
            None => Self::find_by_id(pool, id).await,
        }
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
