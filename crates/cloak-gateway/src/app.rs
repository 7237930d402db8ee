use crate::config::GatewayConfig;
use crate::handlers::{decode_handler, health_handler, info_handler};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub struct App {}

impl App {
    pub fn router(config: &GatewayConfig) -> Router {
        Router::new()
            .route("/", get(info_handler))
            .route("/health", get(health_handler))
            .route("/decode/{payload}", get(decode_handler))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::with_status_code(
                        StatusCode::REQUEST_TIMEOUT,
                        config.request_timeout,
                    )),
            )
    }
}
