//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.learnlist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LearnlistConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub endpoint: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/";
pub const DEFAULT_LOG_FILE: &str = "learnlist.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.learnlist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".learnlist").join("config.toml"))
}

/// Load config from `~/.learnlist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LearnlistConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LearnlistConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LearnlistConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<LearnlistConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(LearnlistConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LearnlistConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# learnlist configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# endpoint = "http://localhost:8000/"   # Or set LEARNLIST_ENDPOINT / --endpoint
# log_file = "learnlist.log"            # Relative to the working directory
# log_level = "debug"                   # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_endpoint` comes from `--endpoint` (None = not specified).
pub fn resolve(config: &LearnlistConfig, cli_endpoint: Option<&str>) -> ResolvedConfig {
    resolve_with(config, cli_endpoint, |name| std::env::var(name).ok())
}

/// [`resolve`] with the environment lookup supplied by the caller.
pub fn resolve_with(
    config: &LearnlistConfig,
    cli_endpoint: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| env("LEARNLIST_ENDPOINT"))
        .or_else(|| config.general.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let log_file = config
        .general
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Log level: env → config → default. Unknown names fall back to the default.
    let log_level = env("LEARNLIST_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|name| parse_level(&name))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        endpoint,
        log_file: PathBuf::from(log_file),
        log_level,
    }
}

fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = LearnlistConfig::default();
        assert!(config.general.endpoint.is_none());
        assert!(config.general.log_level.is_none());
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_of(
        pairs: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    fn file_config() -> LearnlistConfig {
        LearnlistConfig {
            general: GeneralConfig {
                endpoint: Some("http://config.example/".to_string()),
                log_file: Some("custom.log".to_string()),
                log_level: Some("Warn".to_string()),
            },
        }
    }

    const FULL_ENV: &[(&str, &str)] = &[
        ("LEARNLIST_ENDPOINT", "http://env.example/"),
        ("LEARNLIST_LOG_LEVEL", "error"),
    ];

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&LearnlistConfig::default(), None, no_env);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let resolved = resolve_with(&file_config(), None, no_env);
        assert_eq!(resolved.endpoint, "http://config.example/");
        assert_eq!(resolved.log_file, PathBuf::from("custom.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_env_overrides_config() {
        let resolved = resolve_with(&file_config(), None, env_of(FULL_ENV));
        assert_eq!(resolved.endpoint, "http://env.example/");
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_resolve_env_overrides_defaults() {
        let resolved = resolve_with(&LearnlistConfig::default(), None, env_of(FULL_ENV));
        assert_eq!(resolved.endpoint, "http://env.example/");
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_resolve_cli_endpoint_wins() {
        let resolved = resolve_with(&file_config(), Some("http://cli.example/"), env_of(FULL_ENV));
        assert_eq!(resolved.endpoint, "http://cli.example/");
        // Log level has no CLI flag; env still decides it
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_resolve_unknown_env_level_falls_back_to_default() {
        let resolved = resolve_with(
            &file_config(),
            None,
            env_of(&[("LEARNLIST_LOG_LEVEL", "loud")]),
        );
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Some(LevelFilter::Trace));
        assert_eq!(parse_level(" INFO "), Some(LevelFilter::Info));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
endpoint = "http://192.168.1.10:8000/"
log_file = "/tmp/learnlist.log"
log_level = "info"
"#;
        let config: LearnlistConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.general.endpoint.as_deref(),
            Some("http://192.168.1.10:8000/")
        );
        assert_eq!(config.general.log_file.as_deref(), Some("/tmp/learnlist.log"));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
log_level = "error"
"#;
        let config: LearnlistConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("error"));
        assert!(config.general.endpoint.is_none());
    }

    #[test]
    fn test_empty_file_parses() {
        let config: LearnlistConfig = toml::from_str("").unwrap();
        assert!(config.general.endpoint.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("learnlist-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\nendpoint = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("learnlist-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.endpoint.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# endpoint = \"http://localhost:8000/\""));
        // Every line is commented out, so it parses to the defaults.
        let reparsed: LearnlistConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.general.endpoint.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
