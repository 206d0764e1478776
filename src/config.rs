use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "static";

/// Server settings, read from `HOST`, `PORT` and `STATIC_DIR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();

        Self {
            host,
            port,
            static_dir,
        }
    }

    pub fn addr(&self) -> Result<SocketAddr, AddrParseError> {
        socket_addr(&self.host, self.port)
    }

    /// Next port up, tried when the configured one is taken.
    pub fn fallback_addr(&self) -> Option<Result<SocketAddr, AddrParseError>> {
        let port = self.port.checked_add(1)?;
        Some(socket_addr(&self.host, port))
    }
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, AddrParseError> {
    format!("{}:{}", host, port).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.addr().unwrap(), "127.0.0.1:3000".parse().unwrap());
        assert_eq!(
            config.fallback_addr().unwrap().unwrap(),
            "127.0.0.1:3001".parse().unwrap()
        );
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/www"),
        ]);
        assert_eq!(config.addr().unwrap(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        assert_eq!(config_from(&[("PORT", "http")]).port, 3000);
    }

    #[test]
    fn no_fallback_past_last_port() {
        assert!(config_from(&[("PORT", "65535")]).fallback_addr().is_none());
    }

    #[test]
    fn bad_host_is_an_error() {
        assert!(config_from(&[("HOST", "not a host")]).addr().is_err());
    }
}
