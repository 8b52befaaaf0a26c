//! Employee entity model and DTOs.

use resman_core::phase::Phase;
use resman_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `employee` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub firstname: String,
    pub lastname: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    pub firstname: String,
    pub lastname: String,
}

/// DTO for updating an existing employee. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployee {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

impl UpdateEmployee {
    pub fn is_empty(&self) -> bool {
        self.firstname.is_none() && self.lastname.is_none()
    }
}

/// Query parameters for `GET /employees/search`. Matching is case-insensitive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeSearch {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

/// One flattened row of the employee search join.
///
/// Every column after the employee's own is nullable because the join is a
/// chain of `LEFT JOIN`s.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeSearchRow {
    pub id: DbId,
    pub firstname: String,
    pub lastname: String,
    pub project_id: Option<DbId>,
    pub project_name: Option<String>,
    pub zone_id: Option<DbId>,
    pub zone_name: Option<String>,
    pub station_id: Option<DbId>,
    pub station_name: Option<String>,
    pub phase: Option<String>,
    pub hours_worked: Option<f64>,
    pub date: Option<Date>,
}

/// `{id, name}` reference to a related entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedRef {
    pub id: Option<DbId>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchAssignment {
    pub project: NamedRef,
    pub zone: NamedRef,
    pub station: NamedRef,
    pub phase: Option<Phase>,
    pub hours_worked: Option<f64>,
    pub date: Option<Date>,
}

/// An employee with every assignment/hours row the search join produced.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeWithAssignments {
    pub id: DbId,
    pub firstname: String,
    pub lastname: String,
    pub assignments: Vec<SearchAssignment>,
}

/// Group flattened search rows by employee, keeping first-seen order.
///
/// Rows must arrive clustered by employee id (the search query orders by
/// `e.id`); a row only joins the group directly before it.
pub fn group_search_rows(rows: Vec<EmployeeSearchRow>) -> Vec<EmployeeWithAssignments> {
    let mut grouped: Vec<EmployeeWithAssignments> = Vec::new();
    for row in rows {
        let assignment = SearchAssignment {
            project: NamedRef {
                id: row.project_id,
                name: row.project_name,
            },
            zone: NamedRef {
                id: row.zone_id,
                name: row.zone_name,
            },
            station: NamedRef {
                id: row.station_id,
                name: row.station_name,
            },
            phase: row.phase.and_then(|p| p.parse().ok()),
            hours_worked: row.hours_worked,
            date: row.date,
        };

        match grouped.last_mut().filter(|e| e.id == row.id) {
            Some(existing) => existing.assignments.push(assignment),
            None => grouped.push(EmployeeWithAssignments {
                id: row.id,
                firstname: row.firstname,
                lastname: row.lastname,
                assignments: vec![assignment],
            }),
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: DbId, project: Option<(DbId, &str)>, hours: Option<f64>) -> EmployeeSearchRow {
        EmployeeSearchRow {
            id,
            firstname: format!("First{id}"),
            lastname: format!("Last{id}"),
            project_id: project.map(|p| p.0),
            project_name: project.map(|p| p.1.to_string()),
            zone_id: None,
            zone_name: None,
            station_id: None,
            station_name: None,
            phase: hours.map(|_| "SIM".to_string()),
            hours_worked: hours,
            date: None,
        }
    }

    #[test]
    fn rows_group_per_employee_in_order() {
        let grouped = group_search_rows(vec![
            row(2, Some((10, "Alpha")), Some(4.0)),
            row(2, Some((11, "Beta")), Some(2.5)),
            row(1, None, None),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].id, 2);
        assert_eq!(grouped[0].assignments.len(), 2);
        assert_eq!(grouped[0].assignments[1].project.name.as_deref(), Some("Beta"));
        assert_eq!(grouped[0].assignments[0].phase, Some(Phase::Sim));
        assert_eq!(grouped[1].id, 1);
        assert_eq!(grouped[1].assignments.len(), 1);
        assert_eq!(
            grouped[1].assignments[0].project,
            NamedRef { id: None, name: None }
        );
    }

    #[test]
    fn large_result_groups_in_linear_passes() {
        let rows: Vec<_> = (1..=20_000)
            .flat_map(|id| [row(id, Some((1, "Alpha")), Some(1.0)), row(id, None, None)])
            .collect();

        let started = std::time::Instant::now();
        let grouped = group_search_rows(rows);

        assert_eq!(grouped.len(), 20_000);
        assert!(grouped.iter().all(|e| e.assignments.len() == 2));
        assert_eq!(grouped[19_999].id, 20_000);
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn empty_update_detected() {
        assert!(UpdateEmployee::default().is_empty());
        assert!(!UpdateEmployee {
            lastname: Some("Hopper".into()),
            ..Default::default()
        }
        .is_empty());
    }
}
