use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repo::{Entity, SqliteQuery};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Admin {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Priya Sharma")]
    pub name: Option<String>,

    #[schema(example = "priya@company.com")]
    pub email: Option<String>,
}

impl Entity for Admin {
    const TABLE: &'static str = "admins";
    const COLUMNS: &'static [&'static str] = &["name", "email"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.name.clone()).bind(self.email.clone())
    }
}
