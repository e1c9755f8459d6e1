use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8000;

/// Server settings read once at startup. Everything has a default, so a
/// bare environment still boots a working instance.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

fn env_parsed<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env_parsed("HOST").unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: env_parsed("PORT").unwrap_or(DEFAULT_PORT),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_combines_host_and_port() {
        let config = Config {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 9000,
            log_level: "info".to_string(),
        };
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9000");
    }
}
