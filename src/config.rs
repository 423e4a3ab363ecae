use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub log_json: bool,
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
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());
        let log_json = lookup("LOG_JSON").as_deref() == Some("1");

        Self {
            host,
            port,
            static_dir: PathBuf::from(static_dir),
            log_json,
        }
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        parse_addr(&self.host, self.port)
    }

    /// Address tried when the configured port is taken.
    pub fn fallback_addr(&self) -> anyhow::Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .context("no fallback port above 65535")?;
        parse_addr(&self.host, port)
    }
}

fn parse_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("cannot parse bind address {}:{}", host, port))
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
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(!config.log_json);
    }

    #[test]
    fn env_values_override_defaults() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9100"),
            ("STATIC_DIR", "/srv/www"),
            ("LOG_JSON", "1"),
        ]);
        assert_eq!(config.bind_addr().expect("addr").to_string(), "0.0.0.0:9100");
        assert_eq!(config.fallback_addr().expect("addr").port(), 9101);
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert!(config.log_json);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        assert_eq!(config_from(&[("PORT", "eighty")]).port, DEFAULT_PORT);
    }

    #[test]
    fn bad_host_is_an_error() {
        assert!(config_from(&[("HOST", "not a host")]).bind_addr().is_err());
    }

    #[test]
    fn max_port_has_no_fallback() {
        assert!(config_from(&[("PORT", "65535")]).fallback_addr().is_err());
    }
}
