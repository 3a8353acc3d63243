//! Token claims types

use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
///
/// `iat` and `exp` are optional on decode: a token without an expiry is
/// accepted, but a present `exp` that has passed rejects the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: i64,
    /// Issued at (unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expires at (unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Claims for a subject, leaving `iat`/`exp` for the codec to fill.
    pub fn for_subject(sub: i64) -> Self {
        Self {
            sub,
            iat: None,
            exp: None,
        }
    }
}
