//! Server configuration

use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::LabError;

/// Default HTTP bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// How the `jsonrpc` field of a request is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Reject a `jsonrpc` field that is present and not "2.0"; accept absence
    #[default]
    IfPresent,
    /// The field must be present and equal to "2.0"
    Required,
}

/// Transport the server binary listens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Http,
    Stdio,
}

impl FromStr for Transport {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Transport::Http),
            "stdio" => Ok(Transport::Stdio),
            other => Err(LabError::Config(format!(
                "unknown transport '{}' (expected http or stdio)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub transport: Transport,
    pub bind: SocketAddr,
    pub version_policy: VersionPolicy,
    /// Answer cross-origin requests from any origin
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Transport::Http,
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            version_policy: VersionPolicy::IfPresent,
            cors: false,
        }
    }
}

impl ServerConfig {
    /// Parse a bind address such as `0.0.0.0:8080`
    pub fn parse_bind(addr: &str) -> Result<SocketAddr, LabError> {
        addr.parse()
            .map_err(|e| LabError::Config(format!("invalid bind address '{}': {}", addr, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.version_policy, VersionPolicy::IfPresent);
    }

    #[test]
    fn test_transport_parse() {
        assert_eq!("STDIO".parse::<Transport>().unwrap(), Transport::Stdio);
        assert!("grpc".parse::<Transport>().is_err());
    }

    #[test]
    fn test_parse_bind() {
        assert_eq!(
            ServerConfig::parse_bind("0.0.0.0:8080").unwrap().port(),
            8080
        );
        let err = ServerConfig::parse_bind("localhost").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
