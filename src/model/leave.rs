use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repo::{Entity, SqliteQuery};

/// New requests always start as "Pending"; "Approved" and "Rejected" are the
/// other statuses in use. Status stays a plain string on the wire.
pub const STATUS_PENDING: &str = "Pending";

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "department": "Engineering",
        "fromDate": "2026-08-10",
        "toDate": "2026-08-12",
        "reason": "Family function",
        "status": "Pending"
    })
)]
pub struct Leave {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "John Doe")]
    pub name: Option<String>,

    #[schema(example = "Engineering")]
    pub department: Option<String>,

    #[schema(example = "2026-08-10", value_type = Option<String>, format = "date")]
    pub from_date: Option<NaiveDate>,

    #[schema(example = "2026-08-12", value_type = Option<String>, format = "date")]
    pub to_date: Option<NaiveDate>,

    pub reason: Option<String>,

    #[schema(example = "Pending")]
    pub status: String,
}

impl Entity for Leave {
    const TABLE: &'static str = "leaves";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "department",
        "from_date",
        "to_date",
        "reason",
        "status",
    ];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.department.clone())
            .bind(self.from_date)
            .bind(self.to_date)
            .bind(self.reason.clone())
            .bind(self.status.clone())
    }
}
