use crate::codec::Payload;
use crate::error::ResolveError;
use crate::target::resolve_payload;
use std::fmt::Display;

/// Prefix used when none is configured. It points at a placeholder gateway
/// and is expected to be overridden in any real deployment.
pub const DEFAULT_PREFIX: &str = "https://your-gateway.example.com/decode/";

/// Literal text prepended to every encoded payload.
///
/// The rewriter and the gateway deployment must agree on the prefix out of
/// band: the gateway only ever sees the payload segment of the path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenPrefix(String);

impl TokenPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the full reference token for `url`.
    ///
    /// ```
    /// use cloak_core::TokenPrefix;
    ///
    /// let prefix = TokenPrefix::new("https://gw.example/decode/");
    /// assert_eq!(
    ///     prefix.tokenize("https://a.b/c.m3u8"),
    ///     "https://gw.example/decode/aHR0cHM6Ly9hLmIvYy5tM3U4"
    /// );
    /// ```
    pub fn tokenize(&self, url: &str) -> String {
        let payload = Payload::encode(url);
        let mut token = String::with_capacity(self.0.len() + payload.as_str().len());
        token.push_str(&self.0);
        token.push_str(payload.as_str());
        token
    }

    /// Returns the payload part of `token`, or `None` when the token was not
    /// produced with this prefix.
    pub fn strip<'a>(&self, token: &'a str) -> Option<&'a str> {
        token.strip_prefix(self.0.as_str())
    }

    /// Strips the prefix, decodes the payload and validates the result as a
    /// redirect target.
    pub fn resolve(&self, token: &str) -> Result<String, ResolveError> {
        let payload = self.strip(token).ok_or(ResolveError::PrefixMismatch)?;
        resolve_payload(&Payload::from_encoded(payload))
    }
}

impl Default for TokenPrefix {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Display for TokenPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TokenPrefix {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TokenPrefix {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
