//! Token decoding and signature verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::claims::{JwtClaims, TokenValidationError, validate_claims};

/// Verifies a bearer token and returns its claims.
///
/// Behind a trait so the HTTP layer can hold `Arc<dyn JwtValidator>` and tests
/// can swap in alternatives.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenValidationError>;
}

/// HS256 (shared-secret) JWT validator.
pub struct Hs256JwtValidator {
    decoding_key: DecodingKey,
}

impl Hs256JwtValidator {
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(&secret),
        }
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time-window checks run against our own claims below; the claims
        // carry RFC3339 timestamps, not numeric exp/iat.
        validation.validate_exp = false;
        validation.set_required_spec_claims::<&str>(&[]);

        let data = jsonwebtoken::decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenValidationError::Malformed(e.to_string()))?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};
    use stockroom_core::UserId;

    fn mint(secret: &str, claims: &JwtClaims) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn fresh_claims() -> JwtClaims {
        let now = Utc::now();
        JwtClaims {
            sub: UserId::new(),
            issued_at: now - Duration::minutes(1),
            expires_at: now + Duration::minutes(10),
        }
    }

    #[test]
    fn valid_token_round_trips_claims() {
        let claims = fresh_claims();
        let token = mint("secret", &claims);

        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        let decoded = validator.validate(&token, Utc::now()).unwrap();
        assert_eq!(decoded.sub, claims.sub);
    }

    #[test]
    fn wrong_secret_is_malformed() {
        let token = mint("secret", &fresh_claims());

        let validator = Hs256JwtValidator::new(b"other-secret".to_vec());
        let err = validator.validate(&token, Utc::now()).unwrap_err();
        assert!(matches!(err, TokenValidationError::Malformed(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: UserId::new(),
            issued_at: now - Duration::minutes(20),
            expires_at: now - Duration::minutes(10),
        };
        let token = mint("secret", &claims);

        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        assert_eq!(
            validator.validate(&token, now),
            Err(TokenValidationError::Expired)
        );
    }
}
