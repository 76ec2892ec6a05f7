//! Server configuration, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Errors reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `RECALL_ADDR` is not a socket address
    #[error("invalid RECALL_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    /// `RECALL_STATIC_DIR` does not exist
    #[error("static directory not found: {0}")]
    MissingStaticDir(PathBuf),
}

/// Where to listen and what to serve.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub addr: SocketAddr,

    /// Directory holding `app.js` and `style.css`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read `RECALL_ADDR` and `RECALL_STATIC_DIR`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("RECALL_ADDR").ok(),
            std::env::var("RECALL_STATIC_DIR").ok(),
        )
    }

    fn from_values(addr: Option<String>, static_dir: Option<String>) -> Result<Self, ConfigError> {
        let addr = addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr.parse().map_err(|source| ConfigError::InvalidAddr {
            value: addr.clone(),
            source,
        })?;

        let static_dir = static_dir
            .map(PathBuf::from)
            .unwrap_or_else(default_static_dir);
        if !static_dir.is_dir() {
            return Err(ConfigError::MissingStaticDir(static_dir));
        }

        Ok(Self { addr, static_dir })
    }
}

/// The `static/` directory shipped with the crate.
fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::from_values(None, None).unwrap();
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert!(config.static_dir.ends_with("static"));
    }

    #[test]
    fn custom_addr() {
        let config = ServerConfig::from_values(Some("0.0.0.0:8080".into()), None).unwrap();
        assert_eq!(config.addr.port(), 8080);
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_values(Some("localhost".into()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
        assert!(err.to_string().starts_with("invalid RECALL_ADDR \"localhost\""));
    }

    #[test]
    fn missing_static_dir() {
        let err =
            ServerConfig::from_values(None, Some("/definitely/not/here".into())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingStaticDir(_)));
    }
}
