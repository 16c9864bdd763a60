use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::{error::ApiError, model::event::Event, repo::Repo};

#[derive(Deserialize, ToSchema)]
pub struct EventInput {
    #[schema(example = "Annual review")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "2026-09-01", value_type = Option<String>, format = "date")]
    pub date: Option<NaiveDate>,
}

impl EventInput {
    fn into_record(self, id: i64) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses((status = 200, body = Vec<Event>), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Event"
)]
pub async fn list_events(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let events = Repo::<Event>::new(pool.get_ref()).list_all().await?;
    Ok(HttpResponse::Ok().json(events))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = EventInput,
    responses((status = 200, body = Event), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Event"
)]
pub async fn create_event(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EventInput>,
) -> Result<HttpResponse, ApiError> {
    let repo = Repo::<Event>::new(pool.get_ref());
    let id = repo.insert(&payload.into_inner().into_record(0)).await?;
    let stored = repo
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Event {id} missing after insert")))?;
    Ok(HttpResponse::Ok().json(stored))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id", Path, description = "Event ID")),
    request_body = EventInput,
    responses((status = 200, body = Event), (status = 404), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Event"
)]
pub async fn update_event(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<EventInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let record = payload.into_inner().into_record(id);

    if !Repo::<Event>::new(pool.get_ref()).update(id, &record).await? {
        return Err(ApiError::NotFound(format!("Event not found with ID: {id}")));
    }

    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(("id", Path, description = "Event ID")),
    responses((status = 200), (status = 404), (status = 401)),
    security(("bearer_auth" = [])),
    tag = "Event"
)]
pub async fn delete_event(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !Repo::<Event>::new(pool.get_ref()).delete(id).await? {
        return Err(ApiError::NotFound(format!("Event not found with ID: {id}")));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
