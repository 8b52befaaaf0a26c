//! Whitelist of tables that may be exported to a spreadsheet.
//!
//! Export requests name a table in the URL. The name is only ever matched
//! against this enum; it never reaches SQL.

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTable {
    Employee,
    Zones,
    Projects,
    Stations,
    Assignments,
    HoursLogged,
    ProjectMetrics,
}

/// Sheets written by the combined "all tables" export, in order.
pub const EXPORT_ALL_TABLES: [ExportTable; 5] = [
    ExportTable::Employee,
    ExportTable::Zones,
    ExportTable::Projects,
    ExportTable::Stations,
    ExportTable::HoursLogged,
];

impl ExportTable {
    /// Table name, also used for the sheet and file name.
    pub fn table_name(self) -> &'static str {
        match self {
            ExportTable::Employee => "employee",
            ExportTable::Zones => "zones",
            ExportTable::Projects => "projects",
            ExportTable::Stations => "stations",
            ExportTable::Assignments => "employee_project_zone",
            ExportTable::HoursLogged => "hours_logged",
            ExportTable::ProjectMetrics => "project_metrics",
        }
    }
}

impl std::str::FromStr for ExportTable {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(ExportTable::Employee),
            "zones" => Ok(ExportTable::Zones),
            "projects" => Ok(ExportTable::Projects),
            "stations" => Ok(ExportTable::Stations),
            "employee_project_zone" => Ok(ExportTable::Assignments),
            "hours_logged" => Ok(ExportTable::HoursLogged),
            "project_metrics" => Ok(ExportTable::ProjectMetrics),
            other => Err(CoreError::Validation(format!(
                "Table '{other}' cannot be exported"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn known_names_parse() {
        assert_eq!("zones".parse::<ExportTable>().unwrap(), ExportTable::Zones);
        assert_eq!(
            "employee_project_zone".parse::<ExportTable>().unwrap(),
            ExportTable::Assignments
        );
    }

    #[test]
    fn injection_attempt_is_rejected() {
        assert_matches!(
            "employee; DROP TABLE employee".parse::<ExportTable>(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn names_are_consistent_with_parse() {
        for table in EXPORT_ALL_TABLES {
            assert_eq!(table.table_name().parse::<ExportTable>().unwrap(), table);
        }
    }
}
