//! Token encoding, decoding, and header extraction

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::claims::TokenClaims;
use crate::config::AuthConfig;

/// Why a token failed to decode.
///
/// Callers treat every variant the same way (reject as unauthenticated);
/// the split exists so the rejection reason survives into logs and the
/// 401 response body.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("token is malformed")]
    Malformed,
    #[error("signature verification failed")]
    Signature,
    #[error("token has expired")]
    Expired,
    #[error("unsupported signing algorithm")]
    UnsupportedAlgorithm,
    #[error("token verification failed: {0}")]
    Verification(String),
}

impl From<jsonwebtoken::errors::Error> for DecodeError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        let message = e.to_string();
        match e.into_kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => DecodeError::Malformed,
            ErrorKind::InvalidSignature => DecodeError::Signature,
            ErrorKind::ExpiredSignature => DecodeError::Expired,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                DecodeError::UnsupportedAlgorithm
            }
            _ => DecodeError::Verification(message),
        }
    }
}

/// Why a token failed to encode
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("failed to sign token: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),
}

/// HS256 token codec over the process-wide secret.
///
/// Immutable after construction; safe to share across requests.
#[derive(Clone)]
pub struct TokenCodec {
    config: AuthConfig,
}

impl TokenCodec {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Decode and verify a token, returning its claims.
    ///
    /// `exp` is honored when present but not required; a missing expiry
    /// does not reject the token.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, DecodeError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        validation.leeway = 0;

        let decoding_key = DecodingKey::from_secret(self.config.secret.as_ref());

        let token_data =
            jsonwebtoken::decode::<TokenClaims>(token, &decoding_key, &validation).map_err(
                |e| {
                    tracing::debug!(error = %e, "token decode failed");
                    DecodeError::from(e)
                },
            )?;

        Ok(token_data.claims)
    }

    /// Sign claims into a token, filling `iat`/`exp` from config when the
    /// caller left them unset.
    pub fn encode(&self, claims: TokenClaims) -> Result<String, EncodeError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: claims.sub,
            iat: claims.iat.or(Some(now)),
            exp: claims.exp.or(Some(now + self.config.token_ttl_secs)),
        };

        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(self.config.secret.as_ref());

        Ok(jsonwebtoken::encode(&header, &claims, &encoding_key)?)
    }

    /// Issue a fresh token for a subject, returning the token and its
    /// expiry instant. Used by login.
    pub fn issue(&self, subject_id: i64) -> Result<(String, DateTime<Utc>), EncodeError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.config.token_ttl_secs);
        let token = self.encode(TokenClaims {
            sub: subject_id,
            iat: Some(now.timestamp()),
            exp: Some(expires_at.timestamp()),
        })?;

        Ok((token, expires_at))
    }
}

/// Extract the candidate token from the `Authorization` header.
///
/// Takes the last whitespace-delimited field of the header value, with no
/// scheme check: `Bearer <token>`, `Token <token>`, and a bare `<token>`
/// all yield the token. A missing or non-ASCII header yields an empty
/// string, which then fails decode naturally.
pub fn bearer_token(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_whitespace().last())
        .unwrap_or_default()
        .to_string()
}
