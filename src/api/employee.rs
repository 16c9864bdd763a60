use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::{
    error::{ApiError, is_unique_violation},
    model::employee::Employee,
    repo::Repo,
};

#[derive(Deserialize, ToSchema)]
pub struct EmployeeInput {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    #[schema(example = "Developer")]
    pub position: Option<String>,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[schema(example = 50000.0)]
    pub salary: Option<f64>,
    pub password: Option<String>,
    pub photo: Option<String>,
    pub gender: Option<String>,
    #[schema(example = 29)]
    pub age: Option<i64>,
    pub performance: Option<f64>,
}

impl EmployeeInput {
    fn into_record(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            department: self.department,
            position: self.position,
            email: self.email,
            phone: self.phone,
            address: self.address,
            salary: self.salary,
            password: self.password,
            photo: self.photo,
            gender: self.gender,
            age: self.age,
            performance: self.performance,
        }
    }
}

/// List employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employee records", body = Vec<Employee>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = Repo::<Employee>::new(pool.get_ref()).list_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Stored employee record", body = Employee),
        (status = 409, description = "Email already in use"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EmployeeInput>,
) -> Result<HttpResponse, ApiError> {
    let repo = Repo::<Employee>::new(pool.get_ref());

    let id = match repo.insert(&payload.into_inner().into_record(0)).await {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::Conflict("Email already in use".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let stored = repo
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Employee {id} missing after insert")))?;

    Ok(HttpResponse::Ok().json(stored))
}

/// Update Employee (full overwrite; omitted optional fields become null)
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id", Path, description = "Employee ID")),
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Overwritten employee record", body = Employee),
        (status = 404, description = "Employee not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<EmployeeInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    // the path id wins over anything the client put in the body
    let record = payload.into_inner().into_record(id);

    if !Repo::<Employee>::new(pool.get_ref()).update(id, &record).await? {
        return Err(ApiError::NotFound(format!(
            "Employee not found with ID: {id}"
        )));
    }

    Ok(HttpResponse::Ok().json(record))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id", Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Employee not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !Repo::<Employee>::new(pool.get_ref()).delete(id).await? {
        return Err(ApiError::NotFound(format!(
            "Employee not found with ID: {id}"
        )));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
