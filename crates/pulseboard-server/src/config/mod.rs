//! Startup configuration.
//!
//! Layering: built-in defaults, then an optional strict YAML file (path in
//! `PULSEBOARD_CONFIG`), then the process environment (`APP_NAME`,
//! `ENVIRONMENT`, `PORT`, `DEBUG`).

pub mod schema;

use std::collections::HashMap;
use std::env::VarError;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use pulseboard_core::error::{PulseError, Result};
use pulseboard_core::EnvMap;

pub use schema::{AppSection, FileConfig, ServerSection, TickerSection};

/// Env var naming the optional YAML config file.
pub const CONFIG_PATH_VAR: &str = "PULSEBOARD_CONFIG";

/// Variables the environment layer reads.
pub const ENV_KEYS: [&str; 4] = ["APP_NAME", "ENVIRONMENT", "PORT", "DEBUG"];

/// `None` when unset; a value that is not valid UTF-8 is a config error.
fn read_var(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(v) => Ok(Some(v)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(PulseError::Config(format!(
            "{key} is not valid UTF-8: {raw:?}"
        ))),
    }
}

pub fn load_from_file(path: &str) -> Result<FileConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PulseError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<FileConfig> {
    let cfg: FileConfig = serde_yaml::from_str(s)
        .map_err(|e| PulseError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Effective settings after all layers are applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub app_name: String,
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub tick_interval: Duration,
    /// Raw values as captured at startup; becomes the runtime environment mapping.
    pub vars: EnvMap,
}

impl Settings {
    /// Read the real process environment (and the config file it points to).
    pub fn from_env() -> Result<Self> {
        let file = match read_var(CONFIG_PATH_VAR)? {
            Some(path) => Some(load_from_file(&path)?),
            None => None,
        };

        let mut vars = HashMap::new();
        for key in ENV_KEYS {
            if let Some(v) = read_var(key)? {
                vars.insert(key, v);
            }
        }
        Self::resolve(file, |k| vars.get(k).cloned())
    }

    /// Apply `lookup` (environment) on top of `file` (or defaults).
    pub fn resolve<F>(file: Option<FileConfig>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (app, server, ticker, extra_env) = match file {
            Some(f) => (f.app, f.server, f.ticker, f.extra_env),
            None => Default::default(),
        };

        let app_name = lookup("APP_NAME").unwrap_or(app.name);
        let environment = lookup("ENVIRONMENT").unwrap_or(app.environment);
        let port_raw = lookup("PORT").unwrap_or_else(|| server.port.to_string());
        let debug_raw = lookup("DEBUG").unwrap_or_else(|| app.debug.to_string());

        let port: u16 = port_raw.trim().parse().map_err(|_| {
            PulseError::Config(format!("PORT must be an integer in 0..=65535, got {port_raw:?}"))
        })?;
        let debug = debug_raw.eq_ignore_ascii_case("true");

        let mut vars = extra_env;
        vars.insert("APP_NAME".into(), app_name.clone());
        vars.insert("ENVIRONMENT".into(), environment.clone());
        vars.insert("PORT".into(), port_raw);
        vars.insert("DEBUG".into(), debug_raw);

        Ok(Self {
            app_name,
            environment,
            host: server.host,
            port,
            debug,
            tick_interval: Duration::from_millis(ticker.interval_ms),
            vars,
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            PulseError::Config(format!("server.host is not an IP address: {}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: schema::default_app_name(),
            environment: schema::default_environment(),
            host: schema::default_host(),
            port: schema::default_port(),
            debug: false,
            tick_interval: Duration::from_millis(schema::default_interval_ms()),
            vars: EnvMap::from([
                ("APP_NAME".to_string(), schema::default_app_name()),
                ("ENVIRONMENT".to_string(), schema::default_environment()),
                ("PORT".to_string(), schema::default_port().to_string()),
                ("DEBUG".to_string(), "false".to_string()),
            ]),
        }
    }
}
