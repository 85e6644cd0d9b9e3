/**
 * Session Tokens
 *
 * Issues and verifies the HS256 JSON Web Tokens that authenticate every
 * protected request. Tokens are stateless: validity is a function of the
 * signature and the expiry only, and nothing is stored server-side.
 *
 * # Claims
 *
 * - `sub` - identity id (UUID)
 * - `iat` - issued-at, Unix seconds
 * - `exp` - `iat` + configured lifetime (24 hours by default)
 *
 * Verification uses zero leeway: a token is expired as soon as the
 * current time passes `exp`.
 */

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity id
    pub sub: Uuid,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token verification and signing failures
///
/// The verification variants are distinguished for logging only; the
/// HTTP layer reports all of them as the same 401.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signature does not match the server secret
    #[error("token signature does not match")]
    InvalidSignature,

    /// The current time is past the encoded expiry
    #[error("token has expired")]
    Expired,

    /// The token could not be parsed or its claims are unusable
    #[error("token is malformed")]
    Malformed,

    /// Signing a new token failed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl TokenError {
    fn from_verification(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

/// Token issuer and verifier bound to one signing secret
///
/// Cheap to clone; the keys are shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.keys.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service from a secret and a token lifetime
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
                validation,
                ttl,
            }),
        }
    }

    /// Lifetime of tokens issued by this service
    pub fn ttl(&self) -> Duration {
        self.keys.ttl
    }

    /// Issue a token for an identity, valid from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token for an identity as if it had been minted at `issued_at`
    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id,
            iat: issued_at.timestamp(),
            exp: (issued_at + self.keys.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify and decode a token
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.keys.decoding, &self.keys.validation)
            .map(|data| data.claims)
            .map_err(TokenError::from_verification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn service() -> TokenService {
        TokenService::new(b"test-secret", Duration::hours(24))
    }

    #[test]
    fn test_issue_then_verify_round_trips_subject() {
        let tokens = service();
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_expiry_is_one_day_after_issue() {
        let tokens = service();
        let token = tokens.issue(Uuid::new_v4()).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = service();
        let issued_at = Utc::now() - Duration::hours(25);
        let token = tokens.issue_at(Uuid::new_v4(), issued_at).unwrap();

        assert_matches!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_expired_by_seconds_rejected() {
        let tokens = service();
        let issued_at = Utc::now() - Duration::hours(24) - Duration::seconds(5);
        let token = tokens.issue_at(Uuid::new_v4(), issued_at).unwrap();

        assert_matches!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let other = TokenService::new(b"another-secret", Duration::hours(24));
        let token = other.issue(Uuid::new_v4()).unwrap();

        assert_matches!(service().verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_garbage_rejected_as_malformed() {
        let tokens = service();
        assert_matches!(tokens.verify("invalid.token.here"), Err(TokenError::Malformed));
        assert_matches!(tokens.verify(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_non_uuid_subject_rejected_as_malformed() {
        #[derive(Serialize)]
        struct LooseClaims {
            sub: String,
            iat: i64,
            exp: i64,
        }

        let now = Utc::now().timestamp();
        let claims = LooseClaims {
            sub: "not-a-uuid".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_matches!(service().verify(&token), Err(TokenError::Malformed));
    }
}
