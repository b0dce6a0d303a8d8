//! REST server configuration.
//!
//! Resolved once at process startup and passed into [`crate::serve`]. Resolution takes the raw
//! values as arguments so it can be tested without touching the process environment.

use std::net::{AddrParseError, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

/// Port used when neither `CUI_REST_ADDR` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3000;

/// Address used when neither `CUI_REST_ADDR` nor `PORT` is set.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CUI_REST_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// REST server configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestConfig {
    addr: SocketAddr,
}

impl RestConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Resolve the listen address from optional `CUI_REST_ADDR` and `PORT` values.
    ///
    /// `CUI_REST_ADDR` (a full socket address) wins over `PORT`, which binds all interfaces.
    /// Empty or whitespace-only values count as unset.
    pub fn from_env_values(
        rest_addr: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        fn non_empty(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        if let Some(value) = non_empty(rest_addr) {
            let addr = value
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?;
            return Ok(Self::new(addr));
        }

        if let Some(value) = non_empty(port) {
            let port = value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
            return Ok(Self::new(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))));
        }

        Ok(Self::default())
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_values(
            std::env::var("CUI_REST_ADDR").ok(),
            std::env::var("PORT").ok(),
        )
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Default for RestConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let cfg = RestConfig::from_env_values(None, None).unwrap();
        assert_eq!(cfg.addr().to_string(), DEFAULT_REST_ADDR);

        let cfg = RestConfig::from_env_values(Some("  ".into()), Some(String::new())).unwrap();
        assert_eq!(cfg, RestConfig::default());
    }

    #[test]
    fn test_rest_addr_wins_over_port() {
        let cfg =
            RestConfig::from_env_values(Some("127.0.0.1:8080".into()), Some("9000".into()))
                .unwrap();
        assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_port_binds_all_interfaces() {
        let cfg = RestConfig::from_env_values(None, Some("4000".into())).unwrap();
        assert_eq!(cfg.addr().to_string(), "0.0.0.0:4000");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            RestConfig::from_env_values(Some("localhost".into()), None),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            RestConfig::from_env_values(None, Some("70000".into())),
            Err(ConfigError::InvalidPort { .. })
        ));
    }
}
