//! Handlers for `/export`: whole tables as `.xlsx` downloads.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use resman_core::export::{ExportTable, EXPORT_ALL_TABLES};

use crate::error::AppResult;
use crate::export::{build_workbook, load_sheet, XLSX_CONTENT_TYPE};
use crate::state::AppState;

/// Attachment response for a rendered workbook.
fn xlsx_attachment(file_stem: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename={file_stem}.xlsx"),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// GET /export/{table_name}
pub async fn export_table(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
) -> AppResult<Response> {
    let table: ExportTable = table_name.parse()?;
    let sheet = load_sheet(&state.pool, table).await?;
    let rows = sheet.rows.len();
    let bytes = build_workbook(&[sheet])?;

    tracing::info!(table = table.table_name(), rows, "Table exported");
    Ok(xlsx_attachment(table.table_name(), bytes))
}

/// GET /export/all
pub async fn export_all(State(state): State<AppState>) -> AppResult<Response> {
    let mut sheets = Vec::with_capacity(EXPORT_ALL_TABLES.len());
    for table in EXPORT_ALL_TABLES {
        sheets.push(load_sheet(&state.pool, table).await?);
    }
    let bytes = build_workbook(&sheets)?;

    tracing::info!(sheets = sheets.len(), "All tables exported");
    Ok(xlsx_attachment("all_tables", bytes))
}
