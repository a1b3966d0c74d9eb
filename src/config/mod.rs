//! Configuration module for the portfolio backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the database file
    pub db_dir: PathBuf,
    /// Database name, used as the file stem
    pub db_name: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Pre-shared admin key guarding writes (open when unset)
    pub admin_key: Option<String>,
    /// Optional JSON file used to fill empty collections at startup
    pub seed_path: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let db_dir = env::var("PORTFOLIO_DB_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let db_name = env::var("PORTFOLIO_DB_NAME").unwrap_or_else(|_| "PortfolioDB".to_string());

        let bind_addr = env::var("PORTFOLIO_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse::<SocketAddr>()?;

        let admin_key = env::var("PORTFOLIO_ADMIN_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let seed_path = env::var("PORTFOLIO_SEED_PATH").ok().map(PathBuf::from);

        let log_level = env::var("PORTFOLIO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = env::var("PORTFOLIO_LOG_FORMAT")
            .map(|f| LogFormat::parse(&f))
            .unwrap_or(LogFormat::Text);

        Ok(Self {
            db_dir,
            db_name,
            bind_addr,
            admin_key,
            seed_path,
            log_level,
            log_format,
        })
    }

    /// Full path of the SQLite database file.
    pub fn db_path(&self) -> PathBuf {
        self.db_dir.join(format!("{}.sqlite", self.db_name))
    }
}
