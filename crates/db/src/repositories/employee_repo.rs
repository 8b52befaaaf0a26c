//! Repository for the `employee` table.

use resman_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{
    CreateEmployee, Employee, EmployeeSearch, EmployeeSearchRow, UpdateEmployee,
};
use crate::patch::Patch;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, firstname, lastname";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee (firstname, lastname)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.firstname)
            .bind(&input.lastname)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all employees ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee ORDER BY id");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Flattened employee → assignment → hours join, filtered by name.
    ///
    /// Both filters are optional and compared case-insensitively. Rows are
    /// ordered so that all rows of one employee are adjacent.
    pub async fn search(
        pool: &PgPool,
        filter: &EmployeeSearch,
    ) -> Result<Vec<EmployeeSearchRow>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeSearchRow>(
            "SELECT
                e.id, e.firstname, e.lastname,
                p.id AS project_id, p.name AS project_name,
                z.id AS zone_id, z.name AS zone_name,
                s.id AS station_id, s.name AS station_name,
                h.phase, h.hours_worked, h.date
             FROM employee e
             LEFT JOIN employee_project_zone epz ON e.id = epz.employee_id
             LEFT JOIN projects p ON epz.project_id = p.id
             LEFT JOIN zones z ON epz.zone_id = z.id
             LEFT JOIN stations s ON epz.station_id = s.id
             LEFT JOIN hours_logged h ON epz.id = h.employee_project_zone_id
             WHERE (NULLIF($1::text, '') IS NULL OR LOWER(e.firstname) = LOWER($1))
               AND (NULLIF($2::text, '') IS NULL OR LOWER(e.lastname) = LOWER($2))
             ORDER BY e.id, epz.id, h.date, h.id",
        )
        .bind(&filter.firstname)
        .bind(&filter.lastname)
        .fetch_all(pool)
        .await
    }

    /// Update an employee. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let mut patch = Patch::new("employee");
        patch
            .set("firstname", input.firstname.as_deref())
            .set("lastname", input.lastname.as_deref());

        match patch.finish(id, COLUMNS) {
            Some(mut builder) => {
                builder
                    .build_query_as::<Employee>()
                    .fetch_optional(pool)
                    .await
            }
            None => Self::find_by_id(pool, id).await,
        }
    }

    /// Delete an employee by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
