use crate::app::App;
use crate::config::GatewayConfig;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn serve(config: GatewayConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        request_timeout = ?config.request_timeout,
        "gateway listening"
    );

    axum::serve(listener, App::router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
