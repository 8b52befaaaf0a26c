//! Zone entity model and DTOs.

use resman_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `zones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Zone {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateZone {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateZone {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateZone {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
