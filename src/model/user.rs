use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string; the plaintext is never stored.
    pub password: String,
    pub role: String,
    pub last_login_at: Option<String>,
}
