//! Configuration loading and resolution
//!
//! The service takes its settings from a three-tier ladder:
//! 1. Environment variable (highest priority)
//! 2. TOML config file (`<config dir>/archai/archai.toml`)
//! 3. Compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the inference backend base URL
pub const INFERENCE_URL_ENV: &str = "ARCHAI_INFERENCE_URL";

/// Environment variable overriding the HTTP bind port
pub const BIND_PORT_ENV: &str = "ARCHAI_PORT";

/// Default inference backend address when nothing is configured
pub const DEFAULT_INFERENCE_URL: &str = "http://localhost:8000";

/// Default bind port for the front-end service
pub const DEFAULT_BIND_PORT: u16 = 5780;

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ArchaiConfig {
    /// Base URL of the inference backend (no trailing slash)
    pub inference_base_url: String,
    /// Port the HTTP server binds on
    pub bind_port: u16,
}

/// On-disk TOML configuration file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub inference_base_url: Option<String>,
    pub bind_port: Option<u16>,
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed: {}", e)))?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
}

/// Default configuration file path for the platform
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("archai").join("archai.toml"))
}

/// Resolve the inference backend base URL
///
/// Priority: environment variable, then TOML, then compiled default.
/// A trailing slash is stripped so endpoint paths can be appended verbatim.
pub fn resolve_inference_base_url(env_var_name: &str, config: Option<&TomlConfig>) -> String {
    let env_url = std::env::var(env_var_name).ok().filter(|v| !v.trim().is_empty());
    let toml_url = config
        .and_then(|c| c.inference_base_url.clone())
        .filter(|v| !v.trim().is_empty());

    if env_url.is_some() && toml_url.is_some() {
        warn!(
            "Inference base URL set in both {} and TOML config. Using environment (highest priority).",
            env_var_name
        );
    }

    let url = env_url
        .or(toml_url)
        .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string());

    url.trim().trim_end_matches('/').to_string()
}

/// Resolve the HTTP bind port
///
/// Priority: environment variable, then TOML, then compiled default.
/// A malformed environment value is ignored with a warning.
pub fn resolve_bind_port(env_var_name: &str, config: Option<&TomlConfig>) -> u16 {
    if let Ok(raw) = std::env::var(env_var_name) {
        match raw.trim().parse::<u16>() {
            Ok(port) => return port,
            Err(_) => warn!("Ignoring malformed {}: {:?}", env_var_name, raw),
        }
    }

    config
        .and_then(|c| c.bind_port)
        .unwrap_or(DEFAULT_BIND_PORT)
}

/// Load the full service configuration from the standard sources
pub fn load() -> ArchaiConfig {
    let toml_config = config_file_path()
        .filter(|p| p.exists())
        .and_then(|p| match load_toml_config(&p) {
            Ok(c) => {
                info!("Loaded config file: {}", p.display());
                Some(c)
            }
            Err(e) => {
                warn!("Config file ignored: {}", e);
                None
            }
        });

    ArchaiConfig {
        inference_base_url: resolve_inference_base_url(INFERENCE_URL_ENV, toml_config.as_ref()),
        bind_port: resolve_bind_port(BIND_PORT_ENV, toml_config.as_ref()),
    }
}
