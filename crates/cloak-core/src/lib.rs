//! Core types for Cloak playlist reference obfuscation.
//!
//! This crate provides the stateless transform shared by the playlist
//! rewriter and the redirect gateway: the URL-safe payload codec, the
//! token prefix convention, the qualifying-URL scanner and the redirect
//! target validation.

pub mod codec;
pub mod error;
pub mod matcher;
pub mod target;
pub mod token;

pub use codec::{decode_reference, encode_reference, Payload};
pub use error::{DecodeError, ResolveError, ValidationError};
pub use matcher::{qualifying_urls, QualifyingUrls};
pub use target::{resolve_payload, validate_target};
pub use token::TokenPrefix;
