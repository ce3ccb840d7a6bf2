// Configuration module
// Builds the typed server configuration and the shared runtime state.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Files probed, in order, when a directory is requested
    pub index_files: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Build the configuration from defaults plus the CLI port override.
    ///
    /// There is no config file and no environment source: the only external
    /// input is the optional port argument.
    pub fn load(port_override: Option<u16>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("http.index_files", vec!["index.html", "index.htm"])?
            .set_default("logging.access_log", true)?
            .set_override_option("server.port", port_override.map(i64::from))?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared per-process state handed to every connection task.
///
/// The serving root is the working directory at startup, canonicalized once
/// so request paths can be containment-checked against it.
pub struct AppState {
    pub config: Config,
    pub root: PathBuf,
}

impl AppState {
    pub fn new(config: Config) -> std::io::Result<Self> {
        let root = std::env::current_dir()?.canonicalize()?;
        Ok(Self { config, root })
    }
}
