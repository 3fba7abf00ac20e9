//! Usage-safety tokens.
//!
//! A token is the base64url encoding of a truncated HMAC-SHA256 over the
//! token scope (tool name, crate version and OS user), keyed with the
//! installation secret. The same installation, user and build always yield
//! the same token; anything else yields a different one.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Number of MAC bytes kept in a token
pub const TOKEN_BYTES: usize = 16;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Installation secret is empty")]
    EmptySecret,
    #[error("Installation secret cannot be used as an HMAC key")]
    InvalidKey,
}

/// What a token is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenScope {
    pub tool: String,
    pub version: String,
    pub user: String,
}

impl TokenScope {
    pub fn new(
        tool: impl Into<String>,
        version: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            version: version.into(),
            user: user.into(),
        }
    }

    /// Scope for the given tool as run by the current OS user with this build.
    pub fn current(tool: &str) -> Self {
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string());
        Self::new(tool, env!("CARGO_PKG_VERSION"), user)
    }

    fn message(&self) -> String {
        format!("{}\n{}\n{}", self.tool, self.version, self.user)
    }
}

/// Issues and checks tokens for one scope.
#[derive(Clone)]
pub struct TokenIssuer {
    /// Keyed MAC with the scope already absorbed
    mac: HmacSha256,
    token: String,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], scope: &TokenScope) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| TokenError::InvalidKey)?;
        mac.update(scope.message().as_bytes());

        let digest = mac.clone().finalize().into_bytes();
        let token = URL_SAFE_NO_PAD.encode(&digest[..TOKEN_BYTES]);

        Ok(Self { mac, token })
    }

    /// The token callers must present.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Constant-time check of a caller-supplied token. The token must match
    /// exactly; surrounding whitespace is not stripped.
    pub fn verify(&self, candidate: &str) -> bool {
        let Ok(bytes) = URL_SAFE_NO_PAD.decode(candidate) else {
            return false;
        };
        if bytes.len() != TOKEN_BYTES {
            return false;
        }
        self.mac.clone().verify_truncated_left(&bytes).is_ok()
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}
