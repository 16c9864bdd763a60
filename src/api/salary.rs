use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    model::salary::{self, Salary},
    repo::Repo,
};

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInput {
    #[schema(example = "John Doe")]
    pub employee_name: Option<String>,
    #[schema(example = "August")]
    pub month: Option<String>,
    #[schema(example = 50000.0)]
    pub amount: Option<f64>,
    /// Defaults to UNPAID when omitted.
    #[schema(example = "PAID")]
    pub status: Option<String>,
}

impl SalaryInput {
    fn into_record(self, id: i64) -> Salary {
        Salary {
            id,
            employee_name: self.employee_name,
            month: self.month,
            amount: self.amount,
            status: self
                .status
                .unwrap_or_else(|| salary::STATUS_UNPAID.to_string()),
        }
    }
}

/// List salary records
#[utoipa::path(
    get,
    path = "/api/salaries",
    responses(
        (status = 200, description = "All salary records", body = Vec<Salary>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Salary"
)]
pub async fn list_salaries(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let salaries = Repo::<Salary>::new(pool.get_ref()).list_all().await?;
    Ok(HttpResponse::Ok().json(salaries))
}

/// Create salary record
#[utoipa::path(
    post,
    path = "/api/salaries",
    request_body = SalaryInput,
    responses(
        (status = 200, description = "Stored salary record", body = Salary),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Salary"
)]
pub async fn create_salary(
    pool: web::Data<SqlitePool>,
    payload: web::Json<SalaryInput>,
) -> Result<HttpResponse, ApiError> {
    let repo = Repo::<Salary>::new(pool.get_ref());
    let id = repo.insert(&payload.into_inner().into_record(0)).await?;
    let stored = repo
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Salary {id} missing after insert")))?;

    Ok(HttpResponse::Ok().json(stored))
}

/// Update salary record (full overwrite)
#[utoipa::path(
    put,
    path = "/api/salaries/{id}",
    params(("id", Path, description = "Salary record ID")),
    request_body = SalaryInput,
    responses(
        (status = 200, description = "Overwritten salary record", body = Salary),
        (status = 404, description = "Salary record not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Salary"
)]
pub async fn update_salary(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<SalaryInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let record = payload.into_inner().into_record(id);

    if !Repo::<Salary>::new(pool.get_ref()).update(id, &record).await? {
        return Err(ApiError::NotFound(format!(
            "Salary record not found with ID: {id}"
        )));
    }

    Ok(HttpResponse::Ok().json(record))
}

/// Delete salary record
#[utoipa::path(
    delete,
    path = "/api/salaries/{id}",
    params(("id", Path, description = "Salary record ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Salary record not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Salary"
)]
pub async fn delete_salary(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !Repo::<Salary>::new(pool.get_ref()).delete(id).await? {
        return Err(ApiError::NotFound(format!(
            "Salary record not found with ID: {id}"
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
    async fn omitted_status_defaults_to_unpaid() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);
        let auth = auth_header(&config, "ROLE_ADMIN");

        let req = test::TestRequest::post()
            .uri("/api/salaries")
            .insert_header(auth)
            .set_json(json!({"employeeName": "John Doe", "month": "August", "amount": 50000.0}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let stored: Value = test::read_body_json(resp).await;
        assert_eq!(stored["status"], "UNPAID");
        assert_eq!(stored["employeeName"], "John Doe");
    }

    #[actix_web::test]
    async fn explicit_status_is_kept() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);
        let auth = auth_header(&config, "ROLE_ADMIN");

        let req = test::TestRequest::post()
            .uri("/api/salaries")
            .insert_header(auth)
            .set_json(json!({"employeeName": "Ana", "month": "July", "amount": 1.0, "status": "PAID"}))
            .to_request();
        let stored: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(stored["status"], "PAID");
    }

    #[actix_web::test]
    async fn update_forces_path_id_and_overwrites_fully() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);
        let auth = auth_header(&config, "ROLE_ADMIN");

        let create = test::TestRequest::post()
            .uri("/api/salaries")
            .insert_header(auth.clone())
            .set_json(json!({"employeeName": "John", "month": "July", "amount": 40000.0}))
            .to_request();
        let stored: Value = test::read_body_json(test::call_service(&app, create).await).await;
        let id = stored["id"].as_i64().unwrap();

        // month omitted: cleared by the overwrite; status omitted: back to UNPAID
        let update = test::TestRequest::put()
            .uri(&format!("/api/salaries/{id}"))
            .insert_header(auth.clone())
            .set_json(json!({"employeeName": "John", "amount": 45000.0}))
            .to_request();
        let resp = test::call_service(&app, update).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["id"].as_i64().unwrap(), id);
        assert_eq!(updated["amount"], 45000.0);
        assert!(updated["month"].is_null());
        assert_eq!(updated["status"], "UNPAID");
    }

    #[actix_web::test]
    async fn mutations_on_missing_id_return_not_found() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);
        let auth = auth_header(&config, "ROLE_ADMIN");

        let update = test::TestRequest::put()
            .uri("/api/salaries/7")
            .insert_header(auth.clone())
            .set_json(json!({"employeeName": "Ghost"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, update).await.status(),
            StatusCode::NOT_FOUND
        );

        let delete = test::TestRequest::delete()
            .uri("/api/salaries/7")
            .insert_header(auth)
            .to_request();
        assert_eq!(
            test::call_service(&app, delete).await.status(),
            StatusCode::NOT_FOUND
        );

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM salaries")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
