//! Bearer tokens: HS256-signed JWTs whose subject is the user's email.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use ferrobank_core::EmailAddress;

use crate::error::AuthError;

/// JWT claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's email.
    pub sub: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Verifies a presented bearer token and yields the principal identity.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<EmailAddress, AuthError>;
}

/// HS256 token issuer + verifier sharing one secret.
pub struct Hs256Tokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl Hs256Tokens {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a token for an authenticated user.
    pub fn issue(&self, email: &EmailAddress) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(
            |e| {
                tracing::error!(error = %e, "token encoding failed");
                AuthError::Internal
            },
        )
    }
}

impl TokenVerifier for Hs256Tokens {
    fn verify(&self, token: &str) -> Result<EmailAddress, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| AuthError::InvalidToken)?;
        // The subject was validated at signup; re-parse defensively anyway.
        EmailAddress::parse(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}
