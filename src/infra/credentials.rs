use argon2::{Argon2, PasswordHash, PasswordVerifier};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    app_error::{AppError, AppResult},
    use_cases::admin_auth::CredentialVerifier,
};

/// Verifies the admin credential pair against an argon2 PHC hash loaded
/// from configuration.
pub struct ArgonCredentialVerifier {
    username: String,
    password_hash: SecretString,
}

impl ArgonCredentialVerifier {
    pub fn new(username: String, password_hash: SecretString) -> Self {
        Self {
            username,
            password_hash,
        }
    }
}

#[async_trait]
impl CredentialVerifier for ArgonCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> AppResult<bool> {
        if username != self.username {
            return Ok(false);
        }
        let parsed = PasswordHash::new(self.password_hash.expose_secret())
            .map_err(|e| AppError::Internal(format!("invalid admin password hash: {e}")))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{
        PasswordHasher,
        password_hash::{SaltString, rand_core::OsRng},
    };

    fn verifier_for(password: &str) -> ArgonCredentialVerifier {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string();
        ArgonCredentialVerifier::new("admin".to_string(), SecretString::new(hash.into()))
    }

    #[tokio::test]
    async fn accepts_the_configured_pair_only() {
        let verifier = verifier_for("s3cret");
        assert!(verifier.verify("admin", "s3cret").await.unwrap());
        assert!(!verifier.verify("admin", "wrong").await.unwrap());
        assert!(!verifier.verify("root", "s3cret").await.unwrap());
    }

    #[tokio::test]
    async fn malformed_hash_is_an_internal_error() {
        let verifier = ArgonCredentialVerifier::new(
            "admin".to_string(),
            SecretString::new("not-a-phc-string".into()),
        );
        let err = verifier.verify("admin", "anything").await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
