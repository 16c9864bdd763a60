use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repo::{Entity, SqliteQuery};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "department": "Engineering",
        "position": "Developer",
        "email": "john.doe@company.com",
        "phone": "+911712345678",
        "address": "Pune",
        "salary": 50000.0,
        "gender": "Male",
        "age": 29,
        "performance": 4.2
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "Engineering")]
    pub department: Option<String>,

    #[schema(example = "Developer")]
    pub position: Option<String>,

    #[schema(example = "john.doe@company.com", nullable = true)]
    pub email: Option<String>,

    #[schema(example = "+911712345678", nullable = true)]
    pub phone: Option<String>,

    pub address: Option<String>,

    #[schema(example = 50000.0)]
    pub salary: Option<f64>,

    pub password: Option<String>,
    pub photo: Option<String>,
    pub gender: Option<String>,

    #[schema(example = 29)]
    pub age: Option<i64>,

    #[schema(example = 4.2)]
    pub performance: Option<f64>,
}

impl Entity for Employee {
    const TABLE: &'static str = "employees";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "department",
        "position",
        "email",
        "phone",
        "address",
        "salary",
        "password",
        "photo",
        "gender",
        "age",
        "performance",
    ];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.department.clone())
            .bind(self.position.clone())
            .bind(self.email.clone())
            .bind(self.phone.clone())
            .bind(self.address.clone())
            .bind(self.salary)
            .bind(self.password.clone())
            .bind(self.photo.clone())
            .bind(self.gender.clone())
            .bind(self.age)
            .bind(self.performance)
    }
}
