//! Redirect gateway for obfuscated playlist references.
//!
//! Serves `GET /decode/{payload}`: the payload is decoded back into the
//! original `.m3u8` URL and the client is redirected there with a 302.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod server;

pub use app::App;
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use server::serve;
