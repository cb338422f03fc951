//! HS256 JWT minting and validation against the shared service secret.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use reelhost_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid, // user_id
    pub exp: i64,  // expiration timestamp
    pub iat: i64,  // issued at timestamp
}

#[derive(Clone)]
pub struct JwtService {
    secret: String,
    expiry_hours: i64,
}

impl JwtService {
    pub fn new(secret: String, expiry_hours: i64) -> Self {
        Self {
            secret,
            expiry_hours,
        }
    }

    /// Mint a token for a user. Used by the login path and by tests.
    pub fn make_jwt(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id,
            exp: (now + chrono::Duration::hours(self.expiry_hours)).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Validate a token and return the authenticated user id.
    pub fn validate_jwt(&self, token: &str) -> Result<Uuid, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            tracing::debug!("JWT validation failed: {}", e);
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token has expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::Unauthorized("Invalid token signature".to_string())
                }
                _ => AppError::Unauthorized("Invalid or expired token".to_string()),
            }
        })?;

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::new("0123456789abcdef0123456789abcdef".to_string(), 24)
    }

    #[test]
    fn test_make_then_validate_round_trip() {
        let service = test_service();
        let user_id = Uuid::new_v4();
        let token = service.make_jwt(user_id).unwrap();
        assert_eq!(service.validate_jwt(&token).unwrap(), user_id);
    }

    #[test]
    fn test_rejects_token_signed_with_other_secret() {
        let user_id = Uuid::new_v4();
        let token = JwtService::new("another-secret-another-secret-xx".to_string(), 24)
            .make_jwt(user_id)
            .unwrap();
        let err = test_service().validate_jwt(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_rejects_expired_token() {
        // Negative expiry puts exp in the past
        let service = JwtService::new("0123456789abcdef0123456789abcdef".to_string(), -1);
        let token = service.make_jwt(Uuid::new_v4()).unwrap();
        let err = test_service().validate_jwt(&token).unwrap_err();
        match err {
            AppError::Unauthorized(msg) => assert!(msg.contains("expired")),
            other => panic!("Expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_garbage_token() {
        let err = test_service().validate_jwt("not.a.jwt").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
