use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::Config;
use crate::db;

/// Fresh in-memory database with the full schema applied. A single
/// connection, because every `:memory:` connection is its own database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");
    db::run_migrations(&pool).await.expect("apply schema");
    pool
}

/// Rate limits are 0 (disabled) so tests never trip the governor.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        server_addr: "127.0.0.1:0".to_string(),
        access_token_ttl: 900,
        refresh_token_ttl: 604_800,
        rate_login_per_min: 0,
        rate_register_per_min: 0,
        rate_refresh_per_min: 0,
        rate_protected_per_min: 0,
    }
}

pub fn auth_header(config: &Config, role: &str) -> (&'static str, String) {
    let token = crate::auth::jwt::generate_access_token(
        1,
        "tester".to_string(),
        role.to_string(),
        &config.jwt_secret,
        config.access_token_ttl,
    );
    ("Authorization", format!("Bearer {token}"))
}

/// Builds the full application (policy middleware + routes) against the
/// given pool and config, mirroring the wiring in `main`.
#[macro_export]
macro_rules! test_app {
    ($pool:expr, $config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(actix_web::web::Data::new($config.clone()))
                .app_data(actix_web::web::Data::new(
                    $crate::auth::policy::AccessPolicy::standard(),
                ))
                .wrap(actix_web::middleware::from_fn(
                    $crate::auth::middleware::policy_middleware,
                ))
                .configure(|cfg| $crate::routes::configure(cfg, $config.clone())),
        )
        .await
    };
}
