use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::debug;
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    model::leave::{self, Leave},
    repo::Repo,
};

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveInput {
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    #[schema(example = "2026-08-10", value_type = Option<String>, format = "date")]
    pub from_date: Option<NaiveDate>,
    #[schema(example = "2026-08-12", value_type = Option<String>, format = "date")]
    pub to_date: Option<NaiveDate>,
    pub reason: Option<String>,
    /// Accepted but ignored: new requests always start as Pending.
    pub status: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LeaveStatusUpdate {
    #[schema(example = "Approved")]
    pub status: String,
}

/// List leave requests
#[utoipa::path(
    get,
    path = "/api/leaves",
    responses(
        (status = 200, description = "All leave requests", body = Vec<Leave>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn leave_list(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let leaves = Repo::<Leave>::new(pool.get_ref()).list_all().await?;
    Ok(HttpResponse::Ok().json(leaves))
}

/// Create leave request
#[utoipa::path(
    post,
    path = "/api/leaves",
    request_body = LeaveInput,
    responses(
        (status = 200, description = "Stored leave request, status forced to Pending", body = Leave),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn create_leave(
    pool: web::Data<SqlitePool>,
    payload: web::Json<LeaveInput>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    if payload.status.is_some() {
        debug!("Client-supplied status ignored; new leave requests start as Pending");
    }

    let record = Leave {
        id: 0,
        name: payload.name,
        department: payload.department,
        from_date: payload.from_date,
        to_date: payload.to_date,
        reason: payload.reason,
        status: leave::STATUS_PENDING.to_string(),
    };

    let repo = Repo::<Leave>::new(pool.get_ref());
    let id = repo.insert(&record).await?;
    let stored = repo
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Leave {id} missing after insert")))?;

    Ok(HttpResponse::Ok().json(stored))
}

/// Update the status of a leave request
///
/// A genuine partial update: every field except `status` is preserved. The
/// conditional UPDATE doubles as the existence check, so a concurrent delete
/// of the same id cannot slip between a read and a write.
#[utoipa::path(
    patch,
    path = "/api/leaves/{id}",
    params(("id", Path, description = "Leave request ID")),
    request_body = LeaveStatusUpdate,
    responses(
        (status = 200, description = "Leave request with replaced status", body = Leave),
        (status = 404, description = "Leave request not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn update_leave_status(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<LeaveStatusUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let result = sqlx::query("UPDATE leaves SET status = ? WHERE id = ?")
        .bind(&payload.status)
        .bind(id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!(
            "Leave request not found with ID: {id}"
        )));
    }

    let updated = Repo::<Leave>::new(pool.get_ref())
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Leave request not found with ID: {id}")))?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete leave request
#[utoipa::path(
    delete,
    path = "/api/leaves/{id}",
    params(("id", Path, description = "Leave request ID")),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Leave request not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn delete_leave(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !Repo::<Leave>::new(pool.get_ref()).delete(id).await? {
        return Err(ApiError::NotFound(format!(
            "Leave request not found with ID: {id}"
        )));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
