use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::cli::Cli;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Path the entity and public routes are nested under.
    pub api_prefix: String,
    /// Load the sample records into the stores at startup.
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            seed_data: true,
        }
    }
}

impl Config {
    /// Read configuration from the process environment. Every variable is
    /// optional and falls back to its default.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_host(&lookup("LHT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()))?;

        let port = match lookup("LHT_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("LHT_PORT must be a valid port: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let api_prefix = normalize_prefix(
            &lookup("LHT_API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string()),
        )?;

        let seed_data = match lookup("LHT_SEED_DATA").as_deref() {
            None => true,
            Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => return Err(format!("Invalid LHT_SEED_DATA: {}", other)),
        };

        Ok(Self {
            host,
            port,
            api_prefix,
            seed_data,
        })
    }

    /// Apply command-line overrides on top of the environment values.
    pub fn merge_cli(mut self, cli: &Cli) -> Result<Self, String> {
        if let Some(host) = &cli.host {
            self.host = parse_host(host)?;
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(prefix) = &cli.api_prefix {
            self.api_prefix = normalize_prefix(prefix)?;
        }
        if cli.no_seed {
            self.seed_data = false;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: &str) -> Result<IpAddr, String> {
    raw.parse::<IpAddr>()
        .map_err(|_| format!("Invalid host address: {}", raw))
}

/// A prefix must start with `/`; a trailing slash is dropped. `/` alone
/// means "no prefix" and becomes the empty string.
fn normalize_prefix(raw: &str) -> Result<String, String> {
    if !raw.starts_with('/') {
        return Err(format!("API prefix must start with '/': {}", raw));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
