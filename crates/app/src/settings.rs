//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` next to the binary and from `CASHBOOK__*`
//! environment variables (e.g. `CASHBOOK__SERVER__PORT=8080`).
//!
//! ```toml
//! [app]
//! level = "info"
//!
//! [server]
//! bind = "127.0.0.1"
//! port = 3000
//! database = { sqlite = "cashbook.db" }   # or database = "memory"
//! ```
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.database", "memory")?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("CASHBOOK").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
