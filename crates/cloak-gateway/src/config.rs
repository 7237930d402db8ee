use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use typed_builder::TypedBuilder;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime settings of the gateway, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct GatewayConfig {
    #[builder(default = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT))]
    pub listen_addr: SocketAddr,
    /// Upper bound for handling a single request.
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces_port_3000() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr.port(), 3000);
        assert!(config.listen_addr.ip().is_unspecified());
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}
