//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lounge/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::allowlist::RemotePattern;
use crate::core::nav::NavEntry;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoungeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub nav: Vec<NavEntry>,
    #[serde(default)]
    pub images: Vec<RemotePattern>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_route: Option<String>,
    pub fallback_label: Option<String>,
    pub account: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlatformConfig {
    pub base_url: Option<String>,
    pub api_token: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PLATFORM_BASE_URL: &str = "https://api.lounge.gg/v1";
pub const DEFAULT_STAGING_BASE_URL: &str = "https://staging-api.lounge.gg/v1";
pub const DEFAULT_ROUTE: &str = "/quests";
pub const DEFAULT_FALLBACK_LABEL: &str = "Lounge";

/// Default navigation entries, most-specific-first.
///
/// First match wins in the resolver, so any entry whose path is a prefix of
/// another must be listed after it.
pub fn default_nav_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("/quests", "Quests"),
        NavEntry::new("/games", "Games"),
        NavEntry::new("/social", "Social"),
        NavEntry::new("/profile", "Profile"),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub start_route: String,
    pub fallback_label: String,
    pub account: Option<String>,
    pub nav_entries: Vec<NavEntry>,
    pub image_patterns: Vec<RemotePattern>,
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

/// Returns the path to `~/.lounge/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lounge").join("config.toml"))
}

/// Load config from `~/.lounge/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LoungeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoungeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LoungeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LoungeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LoungeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Lounge Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_route = "/quests"
# fallback_label = "Lounge"
# account = "player-one"

# [platform]
# base_url = "https://api.lounge.gg/v1"
# api_token = "lg-..."                 # Or set LOUNGE_API_TOKEN env var

# Navigation entries, most-specific-first: the first matching entry wins,
# so a path that is a prefix of another must be listed after it.
# [[nav]]
# path = "/quests"
# label = "Quests"

# [[nav]]
# path = "/games"
# label = "Games"

# Remote-image origin allowlist. An entry with an empty hostname matches
# any host and is logged as a warning at startup.
# [[images]]
# protocol = "https"
# hostname = "cdn.lounge.gg"
# pathname = "/quests/**"
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
/// `cli_route` is the `--route` flag (None = not specified).
pub fn resolve(config: &LoungeConfig, cli_route: Option<&str>) -> ResolvedConfig {
    // Start route: CLI → env → config → default
    let start_route = cli_route
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LOUNGE_ROUTE").ok())
        .or_else(|| config.general.default_route.clone())
        .unwrap_or_else(|| DEFAULT_ROUTE.to_string());

    // Platform base URL: env → config → default
    let base_url = std::env::var("LOUNGE_BASE_URL")
        .ok()
        .or_else(|| config.platform.base_url.clone())
        .unwrap_or_else(|| DEFAULT_PLATFORM_BASE_URL.to_string());

    // API token: env → config
    let api_token = std::env::var("LOUNGE_API_TOKEN")
        .ok()
        .or_else(|| config.platform.api_token.clone());

    let nav_entries = if config.nav.is_empty() {
        default_nav_entries()
    } else {
        config.nav.clone()
    };

    ResolvedConfig {
        base_url,
        api_token,
        start_route,
        fallback_label: config
            .general
            .fallback_label
            .clone()
            .unwrap_or_else(|| DEFAULT_FALLBACK_LABEL.to_string()),
        account: config.general.account.clone(),
        nav_entries,
        image_patterns: config.images.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = LoungeConfig::default();
        assert!(config.nav.is_empty());
        assert!(config.images.is_empty());
        assert!(config.general.default_route.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = LoungeConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, DEFAULT_PLATFORM_BASE_URL);
        assert_eq!(resolved.fallback_label, DEFAULT_FALLBACK_LABEL);
        assert_eq!(resolved.nav_entries, default_nav_entries());
        assert!(resolved.image_patterns.is_empty());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = LoungeConfig {
            general: GeneralConfig {
                default_route: Some("/games".to_string()),
                fallback_label: Some("Arcade".to_string()),
                account: Some("player-one".to_string()),
            },
            platform: PlatformConfig {
                base_url: Some("https://staging.lounge.gg/v1".to_string()),
                api_token: Some("lg-test".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.start_route, "/games");
        assert_eq!(resolved.fallback_label, "Arcade");
        assert_eq!(resolved.account.as_deref(), Some("player-one"));
        assert_eq!(resolved.base_url, "https://staging.lounge.gg/v1");
    }

    #[test]
    fn test_resolve_cli_route_wins() {
        let config = LoungeConfig {
            general: GeneralConfig {
                default_route: Some("/games".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("/profile"));
        assert_eq!(resolved.start_route, "/profile");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_route = "/games"
fallback_label = "Arcade"

[platform]
base_url = "https://staging.lounge.gg/v1"
api_token = "lg-test-123"

[[nav]]
path = "/games/arcade"
label = "Arcade"

[[nav]]
path = "/games"
label = "Games"

[[images]]
protocol = "https"
hostname = "cdn.lounge.gg"
pathname = "/quests/**"

[[images]]
hostname = ""
pathname = "/**"
"#;
        let config: LoungeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_route.as_deref(), Some("/games"));
        assert_eq!(config.platform.api_token.as_deref(), Some("lg-test-123"));
        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.nav[0].label, "Arcade");
        assert_eq!(config.images.len(), 2);
        assert_eq!(config.images[0].hostname, "cdn.lounge.gg");
        assert!(config.images[1].hostname.is_empty());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
default_route = "/social"
"#;
        let config: LoungeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_route.as_deref(), Some("/social"));
        assert!(config.platform.base_url.is_none());
        assert!(config.nav.is_empty());
        assert!(config.images.is_empty());
    }

    #[test]
    fn test_configured_nav_replaces_defaults() {
        let config = LoungeConfig {
            nav: vec![NavEntry::new("/games", "Games")],
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.nav_entries.len(), 1);
        assert_eq!(resolved.nav_entries[0].path, "/games");
    }
}
