use crate::error::DecodeError;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use std::fmt::Display;

/// Encodes arbitrary text as a URL-safe, unpadded base64 payload.
///
/// This is standard base64 with `+` replaced by `-`, `/` by `_` and the
/// trailing `=` padding removed, which is exactly what the URL-safe no-pad
/// engine produces. The function is total.
pub fn encode_reference(url: &str) -> String {
    URL_SAFE_NO_PAD.encode(url.as_bytes())
}

/// Decodes a payload produced by [`encode_reference`].
///
/// The URL-safe characters are mapped back to the standard alphabet and the
/// padding is restored before decoding, so payloads that still carry their
/// `=` padding are accepted as well.
pub fn decode_reference(payload: &str) -> Result<String, DecodeError> {
    let mut standard: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let pad = (4 - standard.len() % 4) % 4;
    standard.extend(std::iter::repeat('=').take(pad));

    let bytes = STANDARD.decode(standard.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// An encoded payload, the part of a reference token after its prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Payload(String);

impl Payload {
    /// Encodes `url` into a payload.
    pub fn encode(url: &str) -> Self {
        Self(encode_reference(url))
    }

    /// Wraps an already encoded payload without checking it.
    ///
    /// Validity is only established by [`Payload::decode`].
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Recovers the text this payload was encoded from.
    pub fn decode(&self) -> Result<String, DecodeError> {
        decode_reference(&self.0)
    }

    /// Returns the payload as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
