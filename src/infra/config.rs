use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub cors_origin: HeaderValue,
    pub jwt_secret: SecretString,
    pub session_ttl: Duration,
    pub admin_username: String,
    /// Argon2 PHC string, never the plain password.
    pub admin_password_hash: SecretString,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("127.0.0.1:3001".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let cors_origin: HeaderValue = env::var("CORS_ORIGIN")
            .unwrap_or("http://localhost:3000".to_string())
            .parse()
            .expect("CORS_ORIGIN must be a valid header value");

        let jwt_secret: SecretString =
            SecretString::new(env::var("JWT_SECRET").expect("JWT_SECRET must be set").into());

        let session_ttl_minutes: i64 = env::var("SESSION_TTL_MINUTES")
            .unwrap_or("60".to_string())
            .parse()
            .expect("SESSION_TTL_MINUTES must be a valid number");

        let admin_username = env::var("ADMIN_USERNAME").unwrap_or("admin".to_string());
        let admin_password_hash: SecretString = SecretString::new(
            env::var("ADMIN_PASSWORD_HASH")
                .expect("ADMIN_PASSWORD_HASH must be set")
                .into(),
        );

        Self {
            bind_addr,
            database_url,
            cors_origin,
            jwt_secret,
            session_ttl: Duration::minutes(session_ttl_minutes),
            admin_username,
            admin_password_hash,
        }
    }
}
