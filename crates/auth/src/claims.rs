use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::UserId;

/// JWT claims model (transport-agnostic).
///
/// The minimal set of claims the service expects once a token has been
/// decoded/verified. The subject is the principal passed explicitly into
/// every service operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject / principal identifier.
    pub sub: UserId,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,

    #[error("malformed token: {0}")]
    Malformed(String),
}

/// Deterministically validate JWT claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// lives in [`crate::validator`].
pub fn validate_claims(claims: &JwtClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims_at(issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> JwtClaims {
        JwtClaims {
            sub: UserId::new(),
            issued_at,
            expires_at,
        }
    }

    #[test]
    fn claims_inside_window_are_valid() {
        let now = Utc::now();
        let claims = claims_at(now - Duration::minutes(1), now + Duration::minutes(10));
        assert!(validate_claims(&claims, now).is_ok());
    }

    #[test]
    fn expired_claims_are_rejected() {
        let now = Utc::now();
        let claims = claims_at(now - Duration::minutes(20), now - Duration::minutes(10));
        assert_eq!(validate_claims(&claims, now), Err(TokenValidationError::Expired));
    }

    #[test]
    fn future_issued_at_is_rejected() {
        let now = Utc::now();
        let claims = claims_at(now + Duration::minutes(1), now + Duration::minutes(10));
        assert_eq!(validate_claims(&claims, now), Err(TokenValidationError::NotYetValid));
    }

    #[test]
    fn inverted_time_window_is_rejected() {
        let now = Utc::now();
        let claims = claims_at(now + Duration::minutes(10), now);
        assert_eq!(
            validate_claims(&claims, now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }
}
