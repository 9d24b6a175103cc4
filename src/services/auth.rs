//! Session token verification
//!
//! Tokens are issued by the identity provider. Production deployments
//! configure the provider's RS256 public key; without one, tokens are
//! checked against the shared HS256 secret.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::IdentityClaims,
};

#[derive(Clone)]
pub struct AuthService {
    key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let (key, algorithm) = match config.jwt_public_key.as_deref() {
            Some(pem) => {
                // PEMs passed through env vars often carry escaped newlines
                let pem = pem.replace("\\n", "\n");
                let key = DecodingKey::from_rsa_pem(pem.as_bytes())
                    .map_err(|e| AppError::Internal(format!("Invalid identity provider public key: {}", e)))?;
                (key, Algorithm::RS256)
            }
            None => (DecodingKey::from_secret(config.jwt_secret.as_bytes()), Algorithm::HS256),
        };

        let mut validation = Validation::new(algorithm);
        if let Some(issuer) = config.issuer.as_deref() {
            validation.set_issuer(&[issuer]);
        }

        Ok(Self { key, validation })
    }

    /// Verify a bearer token and return its claims
    pub fn verify(&self, token: &str) -> AppResult<IdentityClaims> {
        decode::<IdentityClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Authentication(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_public_key: None,
            issuer: None,
        }
    }

    fn claims(expires_in: Duration) -> IdentityClaims {
        let now = Utc::now();
        IdentityClaims {
            sub: "user_2abc".to_string(),
            email: Some("jane@example.com".to_string()),
            given_name: Some("Jane".to_string()),
            family_name: Some("Doe".to_string()),
            exp: (now + expires_in).timestamp(),
            iat: now.timestamp(),
        }
    }

    #[test]
    fn test_valid_token() {
        let service = AuthService::new(&config("secret")).unwrap();
        let token = claims(Duration::hours(1)).create_token("secret").unwrap();

        let verified = service.verify(&token).unwrap();
        assert_eq!(verified.sub, "user_2abc");
        assert_eq!(verified.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = AuthService::new(&config("secret")).unwrap();
        let token = claims(Duration::hours(1)).create_token("other").unwrap();

        assert!(matches!(service.verify(&token), Err(AppError::Authentication(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = AuthService::new(&config("secret")).unwrap();
        let token = claims(Duration::hours(-2)).create_token("secret").unwrap();

        assert!(matches!(service.verify(&token), Err(AppError::Authentication(_))));
    }

    #[test]
    fn test_missing_issuer_rejected_when_configured() {
        let mut cfg = config("secret");
        cfg.issuer = Some("https://clerk.example.com".to_string());
        let service = AuthService::new(&cfg).unwrap();
        let token = claims(Duration::hours(1)).create_token("secret").unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_public_key_is_a_config_error() {
        let mut cfg = config("secret");
        cfg.jwt_public_key = Some("not a pem".to_string());

        assert!(matches!(AuthService::new(&cfg), Err(AppError::Internal(_))));
    }
}
