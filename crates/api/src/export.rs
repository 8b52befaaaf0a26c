//! Spreadsheet export of whole tables.
//!
//! Each exportable table maps to a typed repository `list` call and a
//! [`SheetRow`] impl, so the table name from the URL never reaches SQL.

use chrono::{Datelike, NaiveDate};
use resman_core::export::ExportTable;
use resman_db::models::assignment::Assignment;
use resman_db::models::employee::Employee;
use resman_db::models::hours::HoursLogged;
use resman_db::models::metrics::ProjectMetrics;
use resman_db::models::project::Project;
use resman_db::models::station::Station;
use resman_db::models::zone::Zone;
use resman_db::repositories::{
    AssignmentRepo, EmployeeRepo, HoursRepo, MetricsRepo, ProjectRepo, StationRepo, ZoneRepo,
};
use resman_db::DbPool;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet, XlsxError};

/// MIME type of `.xlsx` files.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Empty,
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map_or(Cell::Empty, Cell::Text)
    }
}

impl From<Option<NaiveDate>> for Cell {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(Cell::Empty, Cell::Date)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Float)
    }
}

/// A row type that knows how to lay itself out as spreadsheet columns.
pub trait SheetRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

/// One worksheet worth of data.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn from_rows<T: SheetRow>(name: &'static str, rows: &[T]) -> Self {
        Self {
            name,
            headers: T::HEADERS,
            rows: rows.iter().map(SheetRow::cells).collect(),
        }
    }
}

impl SheetRow for Employee {
    const HEADERS: &'static [&'static str] = &["id", "firstname", "lastname"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.id),
            Cell::Text(self.firstname.clone()),
            Cell::Text(self.lastname.clone()),
        ]
    }
}

impl SheetRow for Zone {
    const HEADERS: &'static [&'static str] = &["id", "name", "description"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.id),
            Cell::Text(self.name.clone()),
            self.description.clone().into(),
        ]
    }
}

impl SheetRow for Project {
    const HEADERS: &'static [&'static str] =
        &["id", "name", "description", "start_date", "end_date"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.id),
            Cell::Text(self.name.clone()),
            self.description.clone().into(),
            self.start_date.into(),
            self.end_date.into(),
        ]
    }
}

impl SheetRow for Station {
    const HEADERS: &'static [&'static str] = &["id", "name", "description", "project_id"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.id),
            Cell::Text(self.name.clone()),
            self.description.clone().into(),
            Cell::Int(self.project_id),
        ]
    }
}

impl SheetRow for Assignment {
    const HEADERS: &'static [&'static str] =
        &["id", "employee_id", "project_id", "zone_id", "station_id"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.id),
            Cell::Int(self.employee_id),
            Cell::Int(self.project_id),
            Cell::Int(self.zone_id),
            Cell::Int(self.station_id),
        ]
    }
}

impl SheetRow for HoursLogged {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "employee_project_zone_id",
        "date",
        "phase",
        "hours_worked",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.id),
            Cell::Int(self.employee_project_zone_id),
            Cell::Date(self.date),
            Cell::Text(self.phase.to_string()),
            Cell::Float(self.hours_worked),
        ]
    }
}

impl SheetRow for ProjectMetrics {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "project_id",
        "planned_hours",
        "estimated_completion_date",
        "actual_hours_logged",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.id),
            Cell::Int(self.project_id),
            Cell::Float(self.planned_hours),
            self.estimated_completion_date.into(),
            self.actual_hours_logged.into(),
        ]
    }
}

/// Read a whole whitelisted table into a [`Sheet`].
pub async fn load_sheet(pool: &DbPool, table: ExportTable) -> Result<Sheet, sqlx::Error> {
    let name = table.table_name();
    let sheet = match table {
        ExportTable::Employee => Sheet::from_rows(name, &EmployeeRepo::list(pool).await?),
        ExportTable::Zones => Sheet::from_rows(name, &ZoneRepo::list(pool).await?),
        ExportTable::Projects => Sheet::from_rows(name, &ProjectRepo::list(pool).await?),
        ExportTable::Stations => Sheet::from_rows(name, &StationRepo::list(pool).await?),
        ExportTable::Assignments => Sheet::from_rows(name, &AssignmentRepo::list(pool).await?),
        ExportTable::HoursLogged => Sheet::from_rows(name, &HoursRepo::list(pool).await?),
        ExportTable::ProjectMetrics => Sheet::from_rows(name, &MetricsRepo::list(pool).await?),
    };
    Ok(sheet)
}

/// Render sheets into an in-memory `.xlsx` file, one worksheet each.
pub fn build_workbook(sheets: &[Sheet]) -> Result<Vec<u8>, XlsxError> {
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        for (row_index, cells) in sheet.rows.iter().enumerate() {
            let row = (row_index + 1) as u32;
            for (col, cell) in cells.iter().enumerate() {
                write_cell(worksheet, row, col as u16, cell, &date_format)?;
            }
        }
    }
    workbook.save_to_buffer()
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    date_format: &Format,
) -> Result<(), XlsxError> {
    match cell {
        Cell::Int(v) => {
            worksheet.write_number(row, col, *v as f64)?;
        }
        Cell::Float(v) => {
            worksheet.write_number(row, col, *v)?;
        }
        Cell::Text(v) => {
            worksheet.write_string(row, col, v)?;
        }
        Cell::Date(d) => match excel_date(*d) {
            Some(dt) => {
                worksheet.write_datetime_with_format(row, col, &dt, date_format)?;
            }
            // Excel cannot represent dates before 1900.
            None => {
                worksheet.write_string(row, col, d.to_string())?;
            }
        },
        Cell::Empty => {}
    }
    Ok(())
}

fn excel_date(date: NaiveDate) -> Option<ExcelDateTime> {
    let year = u16::try_from(date.year()).ok()?;
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8).ok()
}
