use crate::codec::Payload;
use crate::error::{ResolveError, ValidationError};

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Checks that `url` starts with `http://` or `https://`, ignoring ASCII case.
///
/// Nothing beyond the scheme is inspected.
pub fn validate_target(url: &str) -> Result<(), ValidationError> {
    let accepted = SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    });

    if accepted {
        Ok(())
    } else {
        Err(ValidationError::NotHttpUrl)
    }
}

/// Decodes a payload and checks that it names an http(s) redirect target.
pub fn resolve_payload(payload: &Payload) -> Result<String, ResolveError> {
    let url = payload.decode()?;
    validate_target(&url)?;
    Ok(url)
}
