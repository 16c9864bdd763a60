use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::{BoxBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web::Data,
};
use serde_json::json;

use crate::auth::auth::AuthUser;
use crate::auth::jwt::verify_token;
use crate::auth::policy::{AccessPolicy, Decision};
use crate::config::Config;
use crate::models::TokenType;

/// Evaluates the access table for every request before routing. Denials never
/// reach a handler, so a rejected request has no side effects.
pub async fn policy_middleware(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let policy = req
        .app_data::<Data<AccessPolicy>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Access policy missing"))?
        .clone();
    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?
        .clone();

    let user = bearer_user(&req, &config);

    match policy.decide(req.path(), user.as_ref().map(|u| u.role.as_str())) {
        Decision::Allow => {
            if let Some(user) = user {
                req.extensions_mut().insert(user);
            }
            Ok(next.call(req).await?.map_into_boxed_body())
        }
        Decision::Unauthenticated => {
            tracing::debug!(path = %req.path(), "Rejecting unauthenticated request");
            let resp = HttpResponse::Unauthorized()
                .json(json!({ "message": "Authentication required" }));
            Ok(req.into_response(resp))
        }
        Decision::Forbidden { required } => {
            tracing::debug!(path = %req.path(), required, "Rejecting request with wrong role");
            let resp = HttpResponse::Forbidden()
                .json(json!({ "message": format!("{required} role required") }));
            Ok(req.into_response(resp))
        }
    }
}

/// A valid access token yields the caller; anything else (absent header,
/// malformed scheme, expired/forged token, refresh token) yields None and the
/// caller counts as unauthenticated.
fn bearer_user(req: &ServiceRequest, config: &Config) -> Option<AuthUser> {
    let token = req
        .headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;

    let claims = verify_token(token, &config.jwt_secret).ok()?;
    if claims.token_type != TokenType::Access {
        return None;
    }

    Some(AuthUser {
        user_id: claims.user_id,
        username: claims.sub,
        role: claims.role,
    })
}

#[cfg(test)]
mod tests {
    use crate::test_app;
    use crate::test_helpers::{auth_header, test_config, test_pool};
    use actix_web::{http::StatusCode, test};

    #[actix_web::test]
    async fn admin_area_rejects_wrong_role_before_routing() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);

        let employee = test::TestRequest::get()
            .uri("/api/admin/reports")
            .insert_header(auth_header(&config, "ROLE_EMPLOYEE"))
            .to_request();
        assert_eq!(
            test::call_service(&app, employee).await.status(),
            StatusCode::FORBIDDEN
        );

        // the right role clears the policy and falls through to routing
        let admin = test::TestRequest::get()
            .uri("/api/admin/reports")
            .insert_header(auth_header(&config, "ROLE_ADMIN"))
            .to_request();
        assert_eq!(
            test::call_service(&app, admin).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn unknown_protected_paths_require_authentication() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);

        let req = test::TestRequest::get()
            .uri("/api/reports/export")
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn garbage_tokens_count_as_unauthenticated() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);

        let req = test::TestRequest::get()
            .uri("/api/employees")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn refresh_tokens_do_not_grant_api_access() {
        let pool = test_pool().await;
        let config = test_config();
        let app = test_app!(pool, config);

        let (refresh, _) = crate::auth::jwt::generate_refresh_token(
            1,
            "tester".to_string(),
            "ROLE_ADMIN".to_string(),
            &config.jwt_secret,
            config.refresh_token_ttl,
        );
        let req = test::TestRequest::get()
            .uri("/api/employees")
            .insert_header(("Authorization", format!("Bearer {refresh}")))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
