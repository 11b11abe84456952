//! Configuration loader
//!
//! Loads service configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If no credentials are present there, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `NUMWIN_ACCESS_TOKEN`: Bearer token for upstream requests
//! - `NUMWIN_CLIENT_ID` / `NUMWIN_CLIENT_SECRET`: Basic auth fallback
//! - `NUMWIN_HOST`: Listen address (default `0.0.0.0`)
//! - `NUMWIN_PORT`: Listen port (default `9876`)
//! - `NUMWIN_UPSTREAM_BASE_URL`: Base URL of the number sources
//! - `NUMWIN_UPSTREAM_TIMEOUT_MS`: Upstream timeout in milliseconds
//! - `NUMWIN_WINDOW_CAPACITY`: Number of values kept in the window
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./numwin.json` or `./numwin.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use numwin_domain::{Config, NumWinError, Result, ServerConfig, UpstreamConfig, WindowConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If no upstream
/// credentials are set there, falls back to a config file.
///
/// # Errors
/// Returns `NumWinError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Upstream credentials are required; everything else falls back to the
/// built-in defaults.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `NumWinError::Config` if credentials are missing, a numeric
/// variable cannot be parsed, or the window capacity is out of range.
pub fn load_from_env() -> Result<Config> {
    let access_token = env_opt("NUMWIN_ACCESS_TOKEN");
    let client_id = env_opt("NUMWIN_CLIENT_ID");
    let client_secret = env_opt("NUMWIN_CLIENT_SECRET");

    if access_token.is_none() && (client_id.is_none() || client_secret.is_none()) {
        return Err(NumWinError::Config(
            "Missing required environment variable: NUMWIN_ACCESS_TOKEN \
             (or NUMWIN_CLIENT_ID and NUMWIN_CLIENT_SECRET)"
                .to_string(),
        ));
    }

    let server_defaults = ServerConfig::default();
    let upstream_defaults = UpstreamConfig::default();
    let window_defaults = WindowConfig::default();

    let config = Config {
        server: ServerConfig {
            host: env_opt("NUMWIN_HOST").unwrap_or(server_defaults.host),
            port: env_parse("NUMWIN_PORT", "port")?.unwrap_or(server_defaults.port),
        },
        upstream: UpstreamConfig {
            base_url: env_opt("NUMWIN_UPSTREAM_BASE_URL").unwrap_or(upstream_defaults.base_url),
            timeout_ms: env_parse("NUMWIN_UPSTREAM_TIMEOUT_MS", "upstream timeout")?
                .unwrap_or(upstream_defaults.timeout_ms),
            access_token,
            client_id,
            client_secret,
        },
        window: WindowConfig {
            capacity: env_parse("NUMWIN_WINDOW_CAPACITY", "window capacity")?
                .unwrap_or(window_defaults.capacity),
        },
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `NumWinError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(NumWinError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            NumWinError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| NumWinError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let config: Config = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| NumWinError::Config(format!("Invalid TOML format: {}", e)))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| NumWinError::Config(format!("Invalid JSON format: {}", e)))?,
        _ => {
            return Err(NumWinError::Config(format!("Unsupported config format: {}", extension)))
        }
    };

    config.validate()?;
    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./numwin.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("numwin.json"),
        dir.join("numwin.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Read an optional environment variable, treating empty values as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an optional environment variable.
///
/// # Errors
/// Returns `NumWinError::Config` if the variable is set but invalid.
fn env_parse<T>(key: &str, label: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| NumWinError::Config(format!("Invalid {}: {}", label, e)))
        })
        .transpose()
}
