use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::{error::ApiError, model::admin::Admin, repo::Repo};

#[derive(Deserialize, ToSchema)]
pub struct AdminInput {
    #[schema(example = "Priya Sharma")]
    pub name: Option<String>,
    #[schema(example = "priya@company.com")]
    pub email: Option<String>,
}

impl AdminInput {
    fn into_record(self, id: i64) -> Admin {
        Admin {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/admins",
    responses((status = 200, body = Vec<Admin>), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_admins(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let admins = Repo::<Admin>::new(pool.get_ref()).list_all().await?;
    Ok(HttpResponse::Ok().json(admins))
}

#[utoipa::path(
    post,
    path = "/api/admins",
    request_body = AdminInput,
    responses((status = 200, body = Admin), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_admin(
    pool: web::Data<SqlitePool>,
    payload: web::Json<AdminInput>,
) -> Result<HttpResponse, ApiError> {
    let repo = Repo::<Admin>::new(pool.get_ref());
    let id = repo.insert(&payload.into_inner().into_record(0)).await?;
    let stored = repo
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Admin {id} missing after insert")))?;
    Ok(HttpResponse::Ok().json(stored))
}

#[utoipa::path(
    put,
    path = "/api/admins/{id}",
    params(("id", Path, description = "Admin ID")),
    request_body = AdminInput,
    responses((status = 200, body = Admin), (status = 404), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_admin(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<AdminInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let record = payload.into_inner().into_record(id);

    if !Repo::<Admin>::new(pool.get_ref()).update(id, &record).await? {
        return Err(ApiError::NotFound(format!("Admin not found with ID: {id}")));
    }

    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/api/admins/{id}",
    params(("id", Path, description = "Admin ID")),
    responses((status = 200), (status = 404), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_admin(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !Repo::<Admin>::new(pool.get_ref()).delete(id).await? {
        return Err(ApiError::NotFound(format!("Admin not found with ID: {id}")));
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
    async fn crud_roundtrip() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);
        let auth = auth_header(&config, "ROLE_ADMIN");

        let create = test::TestRequest::post()
            .uri("/api/admins")
            .insert_header(auth.clone())
            .set_json(json!({"name": "Priya", "email": "priya@company.com"}))
            .to_request();
        let stored: Value = test::read_body_json(test::call_service(&app, create).await).await;
        let id = stored["id"].as_i64().unwrap();

        let update = test::TestRequest::put()
            .uri(&format!("/api/admins/{id}"))
            .insert_header(auth.clone())
            .set_json(json!({"name": "Priya S"}))
            .to_request();
        let updated: Value = test::read_body_json(test::call_service(&app, update).await).await;
        assert_eq!(updated["name"], "Priya S");
        assert!(updated["email"].is_null());

        let delete = test::TestRequest::delete()
            .uri(&format!("/api/admins/{id}"))
            .insert_header(auth.clone())
            .to_request();
        assert_eq!(test::call_service(&app, delete).await.status(), StatusCode::OK);

        let list = test::TestRequest::get()
            .uri("/api/admins")
            .insert_header(auth)
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, list).await).await;
        assert!(body.as_array().unwrap().is_empty());
    }
}
