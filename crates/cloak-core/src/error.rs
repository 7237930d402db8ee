use thiserror::Error;

/// A payload could not be turned back into text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded payload is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Decoded text that is not an acceptable redirect target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("decoded reference is not an http(s) url")]
    NotHttpUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("token does not start with the configured prefix")]
    PrefixMismatch,
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
