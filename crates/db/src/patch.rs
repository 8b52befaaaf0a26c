//! Parameterized partial updates.
//!
//! A [`Patch`] collects only the fields a caller actually supplied and turns
//! them into `UPDATE <table> SET col = $n, ... WHERE id = $m RETURNING ...`.
//! Table and column names are `&'static str` constants chosen by the
//! repositories; values are always bound.

use resman_core::types::DbId;
use sqlx::{Postgres, QueryBuilder};

pub struct Patch<'args> {
    builder: QueryBuilder<'args, Postgres>,
    fields: usize,
}

impl<'args> Patch<'args> {
    pub fn new(table: &'static str) -> Self {
        Self {
            builder: QueryBuilder::new(format!("UPDATE {table} SET ")),
            fields: 0,
        }
    }

    /// Add `column = value` when `value` is present; skip it otherwise.
    pub fn set<T>(&mut self, column: &'static str, value: Option<T>) -> &mut Self
    where
        T: 'args + sqlx::Encode<'args, Postgres> + sqlx::Type<Postgres> + Send,
    {
        if let Some(value) = value {
            if self.fields > 0 {
                self.builder.push(", ");
            }
            self.builder.push(column).push(" = ").push_bind(value);
            self.fields += 1;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields == 0
    }

    /// Finish the statement for row `id`. Returns `None` when nothing was set.
    pub fn finish(mut self, id: DbId, returning: &str) -> Option<QueryBuilder<'args, Postgres>> {
        if self.is_empty() {
            return None;
        }
        self.builder
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" RETURNING ")
            .push(returning);
        Some(self.builder)
    }
}
