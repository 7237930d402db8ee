use clap::Parser;
use cloak_gateway::config::DEFAULT_PORT;
use cloak_gateway::GatewayConfig;
use cloak_telemetry::LogFormat;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const HOST_ENV: &str = "CLOAK_GATEWAY_HOST";
pub const PORT_ENV: &str = "PORT";
pub const REQUEST_TIMEOUT_ENV: &str = "CLOAK_GATEWAY_REQUEST_TIMEOUT_SECS";
pub const LOG_FORMAT_ENV: &str = "CLOAK_LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Parser)]
#[command(name = "cloak-gateway", version, about = "Redirects obfuscated references to their origin")]
pub struct CLI {
    #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    #[arg(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(
        long,
        env = REQUEST_TIMEOUT_ENV,
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout_secs: u64,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl CLI {
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::builder()
            .listen_addr(SocketAddr::new(self.host, self.port))
            .request_timeout(Duration::from_secs(self.request_timeout_secs))
            .build()
    }
}
