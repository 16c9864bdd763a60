use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::repo::{Entity, SqliteQuery};

// Stored for schema completeness; no HTTP surface in this revision.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl Entity for Attendance {
    const TABLE: &'static str = "attendance";
    const COLUMNS: &'static [&'static str] = &["employee_id", "date", "status"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.employee_id)
            .bind(self.date)
            .bind(self.status.clone())
    }
}
