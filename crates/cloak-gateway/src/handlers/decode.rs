use crate::error::{GatewayError, Result};
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use cloak_core::{resolve_payload, Payload, ResolveError};
use tracing::{debug, warn};

/// Redirects to the URL encoded in `payload`.
///
/// Any failure answers 400 with a fixed body; the payload itself only ever
/// reaches the logs.
pub async fn decode_handler(
    payload: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let Path(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected decode path");
        GatewayError::BadRequest
    })?;

    let payload = Payload::from_encoded(payload);
    let url = resolve_payload(&payload).map_err(|error| {
        match &error {
            ResolveError::Decode(source) => {
                let payload_len = payload.as_str().len();
                warn!(error = %source, payload_len, "decode error");
            }
            other => debug!(error = %other, "decoded reference rejected"),
        }
        GatewayError::from(error)
    })?;

    found(&url)
}

/// 302 with `location` copied verbatim into the header.
fn found(location: &str) -> Result<Response> {
    let location = HeaderValue::from_bytes(location.as_bytes()).map_err(|_| {
        debug!("decoded reference cannot be sent as a Location header");
        GatewayError::InvalidTarget
    })?;

    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_keeps_location_verbatim() {
        let response = found("https://example.com/ü.m3u8?a=b&c").unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[LOCATION].as_bytes(),
            "https://example.com/ü.m3u8?a=b&c".as_bytes()
        );
    }

    #[test]
    fn found_rejects_control_characters() {
        assert_eq!(
            found("https://example.com/\r\nSet-Cookie: x").unwrap_err(),
            GatewayError::InvalidTarget
        );
    }
}
