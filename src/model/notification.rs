use serde::{Deserialize, Serialize};

use crate::repo::{Entity, SqliteQuery};

// Stored for schema completeness; no HTTP surface in this revision.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub title: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    pub target_role: Option<String>,
}

impl Entity for Notification {
    const TABLE: &'static str = "notifications";
    const COLUMNS: &'static [&'static str] = &["title", "message", "date", "target_role"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.title.clone())
            .bind(self.message.clone())
            .bind(self.date.clone())
            .bind(self.target_role.clone())
    }
}
