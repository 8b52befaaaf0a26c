//! Repository for the `projects` table.

use resman_core::types::{Date, DbId};
use sqlx::{PgConnection, PgPool};

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::patch::Patch;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, start_date, end_date";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, start_date, end_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by start date, undated projects last.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects ORDER BY start_date NULLS LAST, id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut patch = Patch::new("projects");
        patch
            .set("name", input.name.as_deref())
            .set("description", input.description.as_deref())
            .set("start_date", input.start_date)
            .set("end_date", input.end_date);

        match patch.finish(id, COLUMNS) {
            Some(mut builder) => builder.build_query_as::<Project>().fetch_optional(pool).await,
            None => Self::find_by_id(pool, id).await,
        }
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Read a project's window, locking the row for the rest of the transaction.
    pub async fn window_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<(Option<Date>, Option<Date>)>, sqlx::Error> {
        sqlx::query_as::<_, (Option<Date>, Option<Date>)>(
            "SELECT start_date, end_date FROM projects WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// Move both window dates by `days`, returning the new window.
    ///
    /// NULL dates stay NULL.
    pub async fn shift_window(
        conn: &mut PgConnection,
        id: DbId,
        days: i32,
    ) -> Result<(Option<Date>, Option<Date>), sqlx::Error> {
        sqlx::query_as::<_, (Option<Date>, Option<Date>)>(
            "UPDATE projects
                SET start_date = start_date + $2,
                    end_date = end_date + $2
              WHERE id = $1
              RETURNING start_date, end_date",
        )
        .bind(id)
        .bind(days)
        .fetch_one(conn)
        .await
    }
}
