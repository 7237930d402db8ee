use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cloak_core::ResolveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Request failures. The display text is the response body, so it must
/// never carry request data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Bad request")]
    BadRequest,
    #[error("Invalid original URL")]
    InvalidTarget,
}

impl From<ResolveError> for GatewayError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::Validation(_) => GatewayError::InvalidTarget,
            ResolveError::Decode(_) | ResolveError::PrefixMismatch => GatewayError::BadRequest,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloak_core::{DecodeError, ValidationError};

    #[test]
    fn resolve_errors_map_to_fixed_messages() {
        let decode = ResolveError::Decode(decode_error());
        assert_eq!(GatewayError::from(decode), GatewayError::BadRequest);

        let invalid = ResolveError::Validation(ValidationError::NotHttpUrl);
        assert_eq!(GatewayError::from(invalid), GatewayError::InvalidTarget);

        assert_eq!(GatewayError::BadRequest.to_string(), "Bad request");
        assert_eq!(GatewayError::InvalidTarget.to_string(), "Invalid original URL");
    }

    #[test]
    fn responds_with_400() {
        let response = GatewayError::InvalidTarget.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    fn decode_error() -> DecodeError {
        match cloak_core::decode_reference("!") {
            Err(err) => err,
            Ok(text) => panic!("'!' decoded to {text:?}"),
        }
    }
}
