//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jot/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The character limit and the threshold colors are deliberately *not*
//! configurable — they are the product, not a preference. What is
//! configurable is the styling around the core: the placeholder text and
//! the duration of the animated color transition.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub placeholder: Option<String>,
    pub transition_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PLACEHOLDER: &str = "Write something...";
pub const DEFAULT_TRANSITION_MS: u64 = 250;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub placeholder: String,
    pub transition_ms: u64,
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

/// Returns the path to `~/.jot/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jot").join("config.toml"))
}

/// Load config from `~/.jot/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JotConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<JotConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(JotConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(JotConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: JotConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Jot Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# placeholder = "Write something..."
# transition_ms = 250                # Color fade duration in milliseconds
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
/// `cli_placeholder` and `cli_transition_ms` are from CLI flags (None = not
/// specified).
pub fn resolve(
    config: &JotConfig,
    cli_placeholder: Option<&str>,
    cli_transition_ms: Option<u64>,
) -> ResolvedConfig {
    // Placeholder: CLI → env → config → default
    let placeholder = cli_placeholder
        .map(|s| s.to_string())
        .or_else(|| std::env::var("JOT_PLACEHOLDER").ok())
        .or_else(|| config.general.placeholder.clone())
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    // Transition duration: CLI → env → config → default
    let transition_ms = cli_transition_ms
        .or_else(|| {
            std::env::var("JOT_TRANSITION_MS")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(config.general.transition_ms)
        .unwrap_or(DEFAULT_TRANSITION_MS);

    ResolvedConfig {
        placeholder,
        transition_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = JotConfig::default();
        assert!(config.general.placeholder.is_none());
        assert!(config.general.transition_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = JotConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(resolved.transition_ms, DEFAULT_TRANSITION_MS);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = JotConfig {
            general: GeneralConfig {
                placeholder: Some("Type here".to_string()),
                transition_ms: Some(400),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.placeholder, "Type here");
        assert_eq!(resolved.transition_ms, 400);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = JotConfig {
            general: GeneralConfig {
                placeholder: Some("From file".to_string()),
                transition_ms: Some(400),
            },
        };
        let resolved = resolve(&config, Some("From CLI"), Some(100));
        assert_eq!(resolved.placeholder, "From CLI");
        assert_eq!(resolved.transition_ms, 100);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
transition_ms = 150
"#;
        let config: JotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.transition_ms, Some(150));
        assert!(config.general.placeholder.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
placeholder = "Scribble away"
transition_ms = 300
"#;
        let config: JotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.placeholder.as_deref(), Some("Scribble away"));
        assert_eq!(config.general.transition_ms, Some(300));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let toml_str = "[general]\ntransition_ms = \"not a number\"";
        assert!(toml::from_str::<JotConfig>(toml_str).is_err());
    }
}
