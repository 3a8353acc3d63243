//! Authentication configuration

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Process-wide HS256 signing secret
    pub secret: String,
    /// Lifetime applied to issued tokens, in seconds
    pub token_ttl_secs: i64,
}
