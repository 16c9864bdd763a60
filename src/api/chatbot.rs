use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ChatbotRequest {
    #[schema(example = "hi")]
    pub message: Option<String>,
    #[schema(example = "en")]
    pub language: Option<String>,
    #[schema(example = "admin")]
    pub role: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ChatbotResponse {
    #[schema(example = "You said: hi (Language: en, Role: admin)")]
    pub reply: String,
}

/// Stateless echo; missing fields substitute as empty strings rather than
/// failing the request.
fn format_reply(message: &str, language: &str, role: &str) -> String {
    format!("You said: {message} (Language: {language}, Role: {role})")
}

/// Chatbot echo
#[utoipa::path(
    post,
    path = "/api/chatbot/send",
    request_body = ChatbotRequest,
    responses(
        (status = 200, description = "Echoed message", body = ChatbotResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Chatbot"
)]
pub async fn send_message(payload: web::Json<ChatbotRequest>) -> impl Responder {
    let payload = payload.into_inner();
    let reply = format_reply(
        payload.message.as_deref().unwrap_or_default(),
        payload.language.as_deref().unwrap_or_default(),
        payload.role.as_deref().unwrap_or_default(),
    );

    HttpResponse::Ok().json(ChatbotResponse { reply })
}
