//! Repository for the `project_metrics` table.

use resman_core::types::{Date, DbId};
use sqlx::{PgConnection, PgPool};

use crate::models::metrics::{CreateProjectMetrics, ProjectMetrics, UpdateProjectMetrics};
use crate::patch::Patch;

const COLUMNS: &str =
    "id, project_id, planned_hours, estimated_completion_date, actual_hours_logged";

pub struct MetricsRepo;

impl MetricsRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectMetrics,
    ) -> Result<ProjectMetrics, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_metrics
                (project_id, planned_hours, estimated_completion_date, actual_hours_logged)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMetrics>(&query)
            .bind(input.project_id)
            .bind(input.planned_hours)
            .bind(input.estimated_completion_date)
            .bind(input.actual_hours_logged)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectMetrics>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_metrics WHERE id = $1");
        sqlx::query_as::<_, ProjectMetrics>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectMetrics>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_metrics ORDER BY id");
        sqlx::query_as::<_, ProjectMetrics>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectMetrics,
    ) -> Result<Option<ProjectMetrics>, sqlx::Error> {
        let mut patch = Patch::new("project_metrics");
        patch
            .set("planned_hours", input.planned_hours)
            .set("estimated_completion_date", input.estimated_completion_date)
            .set("actual_hours_logged", input.actual_hours_logged);

        match patch.finish(id, COLUMNS) {
            Some(mut builder) => {
                builder
                    .build_query_as::<ProjectMetrics>()
                    .fetch_optional(pool)
                    .await
            }
            None => Self::find_by_id(pool, id).await,
        }
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_metrics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `(id, planned_hours)` of a project's metrics row inside a transaction.
    pub async fn planned_hours_for_project(
        conn: &mut PgConnection,
        project_id: DbId,
    ) -> Result<Option<(DbId, f64)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, f64)>(
            "SELECT id, planned_hours FROM project_metrics
             WHERE project_id = $1 ORDER BY id LIMIT 1",
        )
        .bind(project_id)
        .fetch_optional(conn)
        .await
    }

    /// Recompute `actual_hours_logged` as the sum over all of the project's
    /// assignments. Returns the number of metrics rows touched.
    pub async fn recompute_actual_hours(
        conn: &mut PgConnection,
        project_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE project_metrics
                SET actual_hours_logged = (
                    SELECT COALESCE(SUM(h.hours_worked), 0)
                      FROM hours_logged h
                      JOIN employee_project_zone epz ON h.employee_project_zone_id = epz.id
                     WHERE epz.project_id = $1
                )
              WHERE project_id = $1",
        )
        .bind(project_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn set_estimated_completion(
        conn: &mut PgConnection,
        id: DbId,
        date: Date,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE project_metrics SET estimated_completion_date = $2 WHERE id = $1")
            .bind(id)
            .bind(date)
            .execute(conn)
            .await?;
        Ok(())
    }
}
