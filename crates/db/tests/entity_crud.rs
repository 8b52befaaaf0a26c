//! Integration tests for the CRUD repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create the full hierarchy (employee, project, zone, station, assignment)
//! - Partial updates through the patch builder
//! - Foreign key violations
//! - Employee search join

use assert_matches::assert_matches;
use chrono::NaiveDate;
use resman_core::phase::Phase;
use resman_db::models::assignment::{CreateAssignment, UpdateAssignment};
use resman_db::models::employee::{
    group_search_rows, CreateEmployee, EmployeeSearch, UpdateEmployee,
};
use resman_db::models::hours::{CreateHoursLogged, UpdateHoursLogged};
use resman_db::models::project::{CreateProject, UpdateProject};
use resman_db::models::station::CreateStation;
use resman_db::models::zone::{CreateZone, UpdateZone};
use resman_db::repositories::{
    AssignmentRepo, EmployeeRepo, HoursRepo, ProjectRepo, StationRepo, ZoneRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_employee(first: &str, last: &str) -> CreateEmployee {
    CreateEmployee {
        firstname: first.to_string(),
        lastname: last.to_string(),
    }
}

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: None,
        start_date: Some(date(2024, 1, 1)),
        end_date: Some(date(2024, 3, 29)),
    }
}

/// Create employee, project, zone and station plus an assignment joining them.
async fn seed_assignment(pool: &PgPool) -> (i64, i64) {
    let employee = EmployeeRepo::create(pool, &new_employee("Grace", "Hopper"))
        .await
        .unwrap();
    let project = ProjectRepo::create(pool, &new_project("Line 4")).await.unwrap();
    let zone = ZoneRepo::create(
        pool,
        &CreateZone {
            name: "North".into(),
            description: None,
        },
    )
    .await
    .unwrap();
    let station = StationRepo::create(
        pool,
        &CreateStation {
            name: "ST-01".into(),
            description: Some("Welding".into()),
            project_id: project.id,
        },
    )
    .await
    .unwrap();
    let assignment = AssignmentRepo::create(
        pool,
        &CreateAssignment {
            employee_id: employee.id,
            project_id: project.id,
            zone_id: zone.id,
            station_id: station.id,
        },
    )
    .await
    .unwrap();
    (employee.id, assignment.id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_create_find_list(pool: PgPool) {
    let created = EmployeeRepo::create(&pool, &new_employee("Alan", "Turing"))
        .await
        .unwrap();
    assert_eq!(created.firstname, "Alan");

    let found = EmployeeRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.unwrap().lastname, "Turing");

    EmployeeRepo::create(&pool, &new_employee("Ada", "Lovelace"))
        .await
        .unwrap();
    let all = EmployeeRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_keeps_other_fields(pool: PgPool) {
    let created = EmployeeRepo::create(&pool, &new_employee("Alan", "Turing"))
        .await
        .unwrap();

    let updated = EmployeeRepo::update(
        &pool,
        created.id,
        &UpdateEmployee {
            firstname: None,
            lastname: Some("Mathison".into()),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.firstname, "Alan");
    assert_eq!(updated.lastname, "Mathison");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = ZoneRepo::update(
        &pool,
        424242,
        &UpdateZone {
            name: Some("Ghost".into()),
            description: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_dates_update(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Retrofit"))
        .await
        .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            end_date: Some(date(2024, 6, 28)),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.start_date, Some(date(2024, 1, 1)));
    assert_eq!(updated.end_date, Some(date(2024, 6, 28)));
    assert_eq!(updated.name, "Retrofit");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_with_unknown_employee_fails(pool: PgPool) {
    let (_, assignment_id) = seed_assignment(&pool).await;

    let result = AssignmentRepo::update(
        &pool,
        assignment_id,
        &UpdateAssignment {
            employee_id: Some(999_999),
            ..Default::default()
        },
    )
    .await;

    assert_matches!(result, Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hours_round_trip_phase(pool: PgPool) {
    let (_, assignment_id) = seed_assignment(&pool).await;

    let entry = HoursRepo::create(
        &pool,
        &CreateHoursLogged {
            employee_project_zone_id: assignment_id,
            date: date(2024, 1, 2),
            phase: Phase::Debug,
            hours_worked: 6.5,
        },
    )
    .await
    .unwrap();
    assert_eq!(entry.phase, Phase::Debug);

    let updated = HoursRepo::update(
        &pool,
        entry.id,
        &UpdateHoursLogged {
            phase: Some(Phase::Ins),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.phase, Phase::Ins);
    assert_eq!(updated.hours_worked, 6.5);

    assert!(HoursRepo::delete(&pool, entry.id).await.unwrap());
    assert!(!HoursRepo::delete(&pool, entry.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_groups_assignments(pool: PgPool) {
    let (employee_id, assignment_id) = seed_assignment(&pool).await;
    EmployeeRepo::create(&pool, &new_employee("Alan", "Turing"))
        .await
        .unwrap();

    for day in [2, 3] {
        HoursRepo::create(
            &pool,
            &CreateHoursLogged {
                employee_project_zone_id: assignment_id,
                date: date(2024, 1, day),
                phase: Phase::Sim,
                hours_worked: 8.0,
            },
        )
        .await
        .unwrap();
    }

    let rows = EmployeeRepo::search(
        &pool,
        &EmployeeSearch {
            firstname: Some("grace".into()),
            lastname: None,
        },
    )
    .await
    .unwrap();
    let grouped = group_search_rows(rows);

    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].id, employee_id);
    assert_eq!(grouped[0].assignments.len(), 2);
    assert_eq!(grouped[0].assignments[0].date, Some(date(2024, 1, 2)));
    assert_eq!(grouped[0].assignments[0].station.name.as_deref(), Some("ST-01"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_without_filters_returns_everyone(pool: PgPool) {
    seed_assignment(&pool).await;
    EmployeeRepo::create(&pool, &new_employee("Alan", "Turing"))
        .await
        .unwrap();

    let rows = EmployeeRepo::search(&pool, &EmployeeSearch::default())
        .await
        .unwrap();
    let grouped = group_search_rows(rows);

    assert_eq!(grouped.len(), 2);
    let alan = grouped.iter().find(|e| e.firstname == "Alan").unwrap();
    assert_eq!(alan.assignments.len(), 1);
    assert!(alan.assignments[0].project.id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_treats_blank_filters_as_absent(pool: PgPool) {
    seed_assignment(&pool).await;
    EmployeeRepo::create(&pool, &new_employee("Alan", "Turing"))
        .await
        .unwrap();

    let blank = EmployeeSearch {
        firstname: Some(String::new()),
        lastname: Some(String::new()),
    };
    let grouped = group_search_rows(EmployeeRepo::search(&pool, &blank).await.unwrap());
    assert_eq!(grouped.len(), 2);

    let by_last = EmployeeSearch {
        firstname: Some(String::new()),
        lastname: Some("turing".into()),
    };
    let grouped = group_search_rows(EmployeeRepo::search(&pool, &by_last).await.unwrap());
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].firstname, "Alan");
}
