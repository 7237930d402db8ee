mod cli;

use crate::cli::CLI;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CLI::parse();

    cloak_telemetry::init(cli.log_format, "cloak_gateway=info,tower_http=info")?;

    let config = cli.gateway_config();
    info!(
        listen_addr = %config.listen_addr,
        log_format = %cli.log_format,
        "starting decode gateway"
    );

    cloak_gateway::serve(config).await?;

    Ok(())
}
