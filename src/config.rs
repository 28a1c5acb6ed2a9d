use dotenvy::dotenv;
use log::{info, warn};
use std::{env as stdenv, path::Path};

pub const DEFAULT_HOST: &str = env!("GREETKV_DEFAULT_HOST");
pub const DEFAULT_PORT: &str = env!("GREETKV_DEFAULT_PORT");
pub const DEFAULT_CORS_FILE: &str = ".env_cors";

pub fn load_env_file() {
    let current_dir = stdenv::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
    let env_path = current_dir.join(".env");

    if dotenv().is_err() {
        // Not fatal, defaults and the real environment still apply.
        warn!(
            ".env file not found. Expected it at: {}",
            env_path.display()
        );
    } else {
        info!(".env loading at: {}", env_path.display());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_file: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| stdenv::var(key).ok())
    }

    /// Builds the config from `HOST`, `PORT` and `CORS_FILE` as resolved by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let fallback_port: u16 = DEFAULT_PORT.parse().unwrap_or(8080);
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|e| {
                warn!(
                    "Invalid PORT {:?} ({}), using {}",
                    raw, e, fallback_port
                );
                fallback_port
            }),
            None => fallback_port,
        };
        let cors_file = lookup("CORS_FILE").unwrap_or_else(|| DEFAULT_CORS_FILE.to_string());
        Self {
            host,
            port,
            cors_file,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(lookup_in(&[]));
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port.to_string(), DEFAULT_PORT);
        assert_eq!(config.cors_file, DEFAULT_CORS_FILE);
    }

    #[test]
    fn overrides_from_environment() {
        let config = ServerConfig::from_lookup(lookup_in(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("CORS_FILE", "origins.txt"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.cors_file, "origins.txt");
    }

    #[test]
    fn bad_port_falls_back() {
        let config = ServerConfig::from_lookup(lookup_in(&[("PORT", "not-a-port")]));
        assert_eq!(config.port.to_string(), DEFAULT_PORT);

        let config = ServerConfig::from_lookup(lookup_in(&[("PORT", "70000")]));
        assert_eq!(config.port.to_string(), DEFAULT_PORT);
    }
}
