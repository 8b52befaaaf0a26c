//! Repository for the `hours_logged` table.

use resman_core::phase::Phase;
use resman_core::types::{Date, DbId};
use sqlx::{PgConnection, PgPool};

use crate::models::hours::{CreateHoursLogged, HoursLogged, UpdateHoursLogged};
use crate::patch::Patch;

const COLUMNS: &str = "id, employee_project_zone_id, date, phase, hours_worked";

pub struct HoursRepo;

impl HoursRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateHoursLogged,
    ) -> Result<HoursLogged, sqlx::Error> {
        let query = format!(
            "INSERT INTO hours_logged (employee_project_zone_id, date, phase, hours_worked)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HoursLogged>(&query)
            .bind(input.employee_project_zone_id)
            .bind(input.date)
            .bind(input.phase.as_str())
            .bind(input.hours_worked)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HoursLogged>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hours_logged WHERE id = $1");
        sqlx::query_as::<_, HoursLogged>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries, oldest work date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<HoursLogged>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hours_logged ORDER BY date, id");
        sqlx::query_as::<_, HoursLogged>(&query).fetch_all(pool).await
    }

    /// List the entries belonging to one project's assignments.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<HoursLogged>, sqlx::Error> {
        sqlx::query_as::<_, HoursLogged>(
            "SELECT h.id, h.employee_project_zone_id, h.date, h.phase, h.hours_worked
             FROM hours_logged h
             JOIN employee_project_zone epz ON h.employee_project_zone_id = epz.id
             WHERE epz.project_id = $1
             ORDER BY h.date, h.id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHoursLogged,
    ) -> Result<Option<HoursLogged>, sqlx::Error> {
        let mut patch = Patch::new("hours_logged");
        patch
            .set("date", input.date)
            .set("phase", input.phase.map(Phase::as_str))
            .set("hours_worked", input.hours_worked);

        match patch.finish(id, COLUMNS) {
            Some(mut builder) => {
                builder
                    .build_query_as::<HoursLogged>()
                    .fetch_optional(pool)
                    .await
            }
            None => Self::find_by_id(pool, id).await,
        }
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hours_logged WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert one entry per date for `assignment_id` in a single statement.
    ///
    /// Returns the number of inserted rows.
    pub async fn insert_many(
        conn: &mut PgConnection,
        assignment_id: DbId,
        dates: &[Date],
        phase: Phase,
        hours_worked: f64,
    ) -> Result<u64, sqlx::Error> {
        if dates.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query(
            "INSERT INTO hours_logged (employee_project_zone_id, date, phase, hours_worked)
             SELECT $1, d, $2, $3 FROM UNNEST($4::date[]) AS d",
        )
        .bind(assignment_id)
        .bind(phase.as_str())
        .bind(hours_worked)
        .bind(dates)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Move every entry of `project_id` dated inside `[from, to]` by `days`.
    ///
    /// Returns the number of moved rows.
    pub async fn shift_project_window(
        conn: &mut PgConnection,
        project_id: DbId,
        from: Date,
        to: Date,
        days: i32,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE hours_logged h
                SET date = h.date + $2
               FROM employee_project_zone epz
              WHERE h.employee_project_zone_id = epz.id
                AND epz.project_id = $1
                AND h.date BETWEEN $3 AND $4",
        )
        .bind(project_id)
        .bind(days)
        .bind(from)
        .bind(to)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
