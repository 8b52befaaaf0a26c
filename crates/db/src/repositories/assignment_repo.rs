//! Repository for the `employee_project_zone` table.

use resman_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::assignment::{Assignment, CreateAssignment, UpdateAssignment};
use crate::patch::Patch;

const COLUMNS: &str = "id, employee_id, project_id, zone_id, station_id";

pub struct AssignmentRepo;

impl AssignmentRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssignment,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee_project_zone (employee_id, project_id, zone_id, station_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(input.employee_id)
            .bind(input.project_id)
            .bind(input.zone_id)
            .bind(input.station_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee_project_zone WHERE id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee_project_zone ORDER BY id");
        sqlx::query_as::<_, Assignment>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAssignment,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let mut patch = Patch::new("employee_project_zone");
        patch
            .set("employee_id", input.employee_id)
            .set("project_id", input.project_id)
            .set("zone_id", input.zone_id)
            .set("station_id", input.station_id);

        match patch.finish(id, COLUMNS) {
            Some(mut builder) => {
                builder
                    .build_query_as::<Assignment>()
                    .fetch_optional(pool)
                    .await
            }
            None => Self::find_by_id(pool, id).await,
        }
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employee_project_zone WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Project that owns assignment `id`, if the assignment exists.
    pub async fn project_id_of(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT project_id FROM employee_project_zone WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }
}
