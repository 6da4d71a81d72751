//! Admin authentication.
//!
//! - [`password`] -- Argon2id hashing and verification of the admin password.
//! - [`jwt`] -- HS256 access-token generation and validation.
//!
//! Handlers never talk to either directly: they go through the
//! [`Authenticator`] held in application state, so the token scheme can be
//! swapped without touching routes.

pub mod jwt;
pub mod password;

use tourdesk_core::error::CoreError;

use self::jwt::{generate_access_token, validate_token, JwtConfig};

/// The only role the service issues.
pub const ROLE_ADMIN: &str = "admin";

/// Subject recorded in admin tokens.
const ADMIN_SUBJECT: &str = "admin";

/// Who a verified token belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub subject: String,
    pub role: String,
}

/// A freshly issued capability token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

/// Issues and verifies capability tokens for admin routes.
pub trait Authenticator: Send + Sync {
    /// Issue a token for the admin after the password has been verified.
    fn issue(&self) -> Result<IssuedToken, CoreError>;

    /// Verify a bearer token. Any failure is `Unauthorized`.
    fn authenticate(&self, token: &str) -> Result<AdminIdentity, CoreError>;
}

/// [`Authenticator`] backed by HS256 JWTs.
pub struct JwtAuthenticator {
    config: JwtConfig,
}

impl JwtAuthenticator {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl Authenticator for JwtAuthenticator {
    fn issue(&self) -> Result<IssuedToken, CoreError> {
        let token = generate_access_token(ADMIN_SUBJECT, ROLE_ADMIN, &self.config)
            .map_err(|e| CoreError::Internal(format!("Failed to sign token: {e}")))?;
        Ok(IssuedToken {
            token,
            expires_in: self.config.lifetime().num_seconds(),
        })
    }

    fn authenticate(&self, token: &str) -> Result<AdminIdentity, CoreError> {
        let claims = validate_token(token, &self.config)
            .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))?;
        Ok(AdminIdentity {
            subject: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn authenticator() -> JwtAuthenticator {
        JwtAuthenticator::new(JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        })
    }

    #[test]
    fn issued_tokens_authenticate_as_admin() {
        let auth = authenticator();
        let issued = auth.issue().unwrap();
        assert_eq!(issued.expires_in, 3600);

        let identity = auth.authenticate(&issued.token).unwrap();
        assert_eq!(identity.role, ROLE_ADMIN);
    }

    #[test]
    fn garbage_tokens_are_unauthorized() {
        assert_matches!(
            authenticator().authenticate("not.a.token"),
            Err(CoreError::Unauthorized(_))
        );
    }
}
