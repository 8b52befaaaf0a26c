//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods that must run
//! inside a caller's transaction take `&mut PgConnection` instead.

pub mod assignment_repo;
pub mod employee_repo;
pub mod hours_repo;
pub mod metrics_repo;
pub mod project_repo;
pub mod station_repo;
pub mod zone_repo;

pub use assignment_repo::AssignmentRepo;
pub use employee_repo::EmployeeRepo;
pub use hours_repo::HoursRepo;
pub use metrics_repo::MetricsRepo;
pub use project_repo::ProjectRepo;
pub use station_repo::StationRepo;
pub use zone_repo::ZoneRepo;
