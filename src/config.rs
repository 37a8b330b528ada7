//! Runtime configuration read from the environment.

use crate::error::{DataError, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const HOST_VAR: &str = "FASTFOOD_HOST";
pub const PORT_VAR: &str = "FASTFOOD_PORT";
pub const DATA_DIR_VAR: &str = "FASTFOOD_DATA_DIR";
pub const STRICT_DATA_VAR: &str = "FASTFOOD_STRICT_DATA";

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding menu.json, cart.json, plus.json and 4pc-chicken.json
    pub data_dir: PathBuf,
    /// Abort startup on the first unreadable reference document instead of
    /// falling back to empty data.
    pub strict_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup(HOST_VAR) {
            Some(raw) => raw.parse().map_err(|_| DataError::Config {
                message: format!("{} is not an IP address: {}", HOST_VAR, raw),
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.parse().map_err(|_| DataError::Config {
                message: format!("{} is not a port number: {}", PORT_VAR, raw),
            })?,
            None => DEFAULT_PORT,
        };

        let data_dir = match lookup(DATA_DIR_VAR) {
            Some(raw) => PathBuf::from(raw),
            None => {
                let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                locate_data_directory(&current_dir)
            }
        };

        let strict_data = match lookup(STRICT_DATA_VAR) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| DataError::Config {
                message: format!("{} must be true or false, got {}", STRICT_DATA_VAR, raw),
            })?,
            None => false,
        };

        Ok(Self {
            host,
            port,
            data_dir,
            strict_data,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Looks for `./data`, then `../data`, falling back to the relative `data` path.
fn locate_data_directory(current_dir: &Path) -> PathBuf {
    if current_dir.join("data").exists() {
        return current_dir.join("data");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("data").exists() {
            return parent.join("data");
        }
    }

    PathBuf::from("data")
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[(DATA_DIR_VAR, "/srv/data")]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert!(!config.strict_data);
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "9090"),
            (DATA_DIR_VAR, "fixtures"),
            (STRICT_DATA_VAR, "TRUE"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
        assert!(config.strict_data);
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[(PORT_VAR, "eighty")]).unwrap_err();
        assert!(matches!(err, DataError::Config { .. }));
    }

    #[test]
    fn rejects_bad_flag() {
        assert!(config_from(&[(STRICT_DATA_VAR, "maybe")]).is_err());
    }
}
