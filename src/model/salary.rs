use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repo::{Entity, SqliteQuery};

/// Records without an explicit status start unpaid.
pub const STATUS_UNPAID: &str = "UNPAID";

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "John Doe")]
    pub employee_name: Option<String>,

    #[schema(example = "August")]
    pub month: Option<String>,

    #[schema(example = 50000.0)]
    pub amount: Option<f64>,

    #[schema(example = "UNPAID")]
    pub status: String,
}

impl Entity for Salary {
    const TABLE: &'static str = "salaries";
    const COLUMNS: &'static [&'static str] = &["employee_name", "month", "amount", "status"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.employee_name.clone())
            .bind(self.month.clone())
            .bind(self.amount)
            .bind(self.status.clone())
    }
}
