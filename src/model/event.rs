use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repo::{Entity, SqliteQuery};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Event {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Annual review")]
    pub title: String,

    pub description: Option<String>,

    #[schema(example = "2026-09-01", value_type = Option<String>, format = "date")]
    pub date: Option<NaiveDate>,
}

impl Entity for Event {
    const TABLE: &'static str = "events";
    const COLUMNS: &'static [&'static str] = &["title", "description", "date"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.title.clone())
            .bind(self.description.clone())
            .bind(self.date)
    }
}
