use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::instrument;

use crate::app_error::{AppError, AppResult};

/// Checks an admin credential pair. Injected so the credential store can be
/// swapped without touching the session logic.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> AppResult<bool>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Clone)]
pub struct AdminAuthUseCases {
    verifier: Arc<dyn CredentialVerifier>,
    jwt_secret: SecretString,
    session_ttl: Duration,
}

impl AdminAuthUseCases {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        jwt_secret: SecretString,
        session_ttl: Duration,
    ) -> Self {
        Self {
            verifier,
            jwt_secret,
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Issues a session token for a valid credential pair.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        if !self.verifier.verify(username, password).await? {
            return Err(AppError::InvalidCredentials);
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = AdminClaims {
            sub: username.to_string(),
            iat: now,
            exp: now + self.session_ttl.whole_seconds(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.expose_secret().as_bytes()),
        )
        .map_err(|e| AppError::Internal(e.to_string()))
    }

    /// Validates the session cookie carried by an admin request. Anything
    /// short of a verifiable, unexpired token means the caller must log in.
    pub fn authorize(&self, token: &str) -> AppResult<AdminClaims> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::AuthRequired)
    }
}
