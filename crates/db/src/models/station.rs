//! Station entity model and DTOs.

use resman_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `stations` table. Each station belongs to one project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Station {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub project_id: DbId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStation {
    pub name: String,
    pub description: Option<String>,
    pub project_id: DbId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStation {
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<DbId>,
}

impl UpdateStation {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.project_id.is_none()
    }
}
