use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::{error::ApiError, model::department::Department, repo::Repo};

#[derive(Deserialize, ToSchema)]
pub struct DepartmentInput {
    #[schema(example = "Engineering")]
    pub name: String,
    pub description: Option<String>,
}

impl DepartmentInput {
    fn into_record(self, id: i64) -> Department {
        Department {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/departments",
    responses((status = 200, body = Vec<Department>), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Department"
)]
pub async fn list_departments(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let departments = Repo::<Department>::new(pool.get_ref()).list_all().await?;
    Ok(HttpResponse::Ok().json(departments))
}

#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = DepartmentInput,
    responses((status = 200, body = Department), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Department"
)]
pub async fn create_department(
    pool: web::Data<SqlitePool>,
    payload: web::Json<DepartmentInput>,
) -> Result<HttpResponse, ApiError> {
    let repo = Repo::<Department>::new(pool.get_ref());
    let id = repo.insert(&payload.into_inner().into_record(0)).await?;
    let stored = repo.get(id).await?.ok_or_else(|| {
        ApiError::Internal(anyhow::anyhow!("Department {id} missing after insert"))
    })?;
    Ok(HttpResponse::Ok().json(stored))
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(("id", Path, description = "Department ID")),
    request_body = DepartmentInput,
    responses((status = 200, body = Department), (status = 404), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Department"
)]
pub async fn update_department(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<DepartmentInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let record = payload.into_inner().into_record(id);

    if !Repo::<Department>::new(pool.get_ref()).update(id, &record).await? {
        return Err(ApiError::NotFound(format!(
            "Department not found with ID: {id}"
        )));
    }

    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(("id", Path, description = "Department ID")),
    responses((status = 200), (status = 404), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Department"
)]
pub async fn delete_department(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !Repo::<Department>::new(pool.get_ref()).delete(id).await? {
        return Err(ApiError::NotFound(format!(
            "Department not found with ID: {id}"
        )));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}

#[cfg(test)]
mod tests {
    use crate::test_app;
    use crate::test_helpers::{auth_header, test_config, test_pool};
    use actix_web::{http::StatusCode, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn create_assigns_ids_in_order() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);
        let auth = auth_header(&config, "ROLE_ADMIN");

        for name in ["Engineering", "Sales"] {
            let req = test::TestRequest::post()
                .uri("/api/departments")
                .insert_header(auth.clone())
                .set_json(json!({"name": name}))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        let list = test::TestRequest::get()
            .uri("/api/departments")
            .insert_header(auth)
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, list).await).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Engineering", "Sales"]);
    }

    #[actix_web::test]
    async fn update_missing_department_is_not_found() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);
        let auth = auth_header(&config, "ROLE_ADMIN");

        let update = test::TestRequest::put()
            .uri("/api/departments/11")
            .insert_header(auth)
            .set_json(json!({"name": "Ghost"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, update).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
