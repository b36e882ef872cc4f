//! Configuration loading for Saffron.
//!
//! Configuration follows a precedence chain:
//! 1. Environment variables (highest priority)
//! 2. User config (`~/.saffron/config.toml`)
//! 3. Defaults (lowest priority)
//!
//! All configuration is optional. The system runs with sensible defaults
//! when no config exists.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SaffronError};

/// Main configuration struct for Saffron.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Leaderboard synthesis configuration.
    pub leaderboard: LeaderboardConfig,
    /// Content provider configuration.
    pub content: ContentConfig,
}

/// Leaderboard synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Half-range of the symmetric xp jitter applied to competitors.
    pub jitter: u32,
    /// Minimum displayed competitor xp.
    pub floor_xp: u32,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            jitter: 100,
            floor_xp: 10,
        }
    }
}

/// Content provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    /// Language the learner reads explanations in.
    pub language: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
        }
    }
}

/// Languages the content provider can target.
pub const VALID_LANGUAGES: &[&str] = &["en", "zh-tw", "ja", "ko"];

impl ContentConfig {
    /// Check if a language code is valid.
    pub fn is_valid_language(value: &str) -> bool {
        VALID_LANGUAGES.contains(&value)
    }
}

impl Config {
    /// Load configuration with the full precedence chain.
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config() {
            config = user_config;
        }

        config.apply_env_overrides();
        config
    }

    /// Load user config from `<saffron_home>/config.toml`.
    fn load_user_config() -> Option<Config> {
        let home = saffron_home()?;
        let config_path = home.join("config.toml");
        Self::load_from_file(&config_path).ok()
    }

    /// Load config from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| SaffronError::storage(path, e))?;
        toml::from_str(&content).map_err(|e| SaffronError::config(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // SAFFRON_LEADERBOARD_JITTER
        if let Ok(val) = env::var("SAFFRON_LEADERBOARD_JITTER") {
            match val.parse::<u32>() {
                Ok(n) => self.leaderboard.jitter = n,
                Err(_) => eprintln!(
                    "Warning: Invalid SAFFRON_LEADERBOARD_JITTER value '{}'. \
                    Expected a non-negative integer. Using default '{}'.",
                    val, self.leaderboard.jitter
                ),
            }
        }

        // SAFFRON_LEADERBOARD_FLOOR
        if let Ok(val) = env::var("SAFFRON_LEADERBOARD_FLOOR") {
            match val.parse::<u32>() {
                Ok(n) => self.leaderboard.floor_xp = n,
                Err(_) => eprintln!(
                    "Warning: Invalid SAFFRON_LEADERBOARD_FLOOR value '{}'. \
                    Expected a non-negative integer. Using default '{}'.",
                    val, self.leaderboard.floor_xp
                ),
            }
        }

        // SAFFRON_LANGUAGE
        if let Ok(val) = env::var("SAFFRON_LANGUAGE") {
            if ContentConfig::is_valid_language(&val) {
                self.content.language = val;
            } else {
                eprintln!(
                    "Warning: Invalid SAFFRON_LANGUAGE value '{}'. \
                    Valid values: {:?}. Using default '{}'.",
                    val, VALID_LANGUAGES, self.content.language
                );
            }
        }
    }
}

/// Get the Saffron home directory.
///
/// Checks `SAFFRON_HOME` first, then falls back to `~/.saffron`.
pub fn saffron_home() -> Option<PathBuf> {
    if let Ok(home) = env::var("SAFFRON_HOME") {
        if home.is_empty() {
            tracing::warn!("SAFFRON_HOME is empty, using default");
        } else {
            let path = PathBuf::from(&home);
            if path.is_absolute() {
                return Some(path);
            }
            if let Ok(canonical) = path.canonicalize() {
                return Some(canonical);
            }
            tracing::warn!("SAFFRON_HOME is relative and doesn't exist, using as-is");
            return Some(path);
        }
    }

    dirs::home_dir().map(|home| home.join(".saffron"))
}

/// Get the accounts directory.
///
/// Returns `<saffron_home>/accounts/`.
pub fn accounts_dir() -> Option<PathBuf> {
    saffron_home().map(|h| h.join("accounts"))
}

/// Get the active-session pointer path.
///
/// Returns `<saffron_home>/session`.
pub fn session_path() -> Option<PathBuf> {
    saffron_home().map(|h| h.join("session"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.leaderboard.jitter, 100);
        assert_eq!(config.leaderboard.floor_xp, 10);
        assert_eq!(config.content.language, "en");
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        let toml_content = r#"
[leaderboard]
jitter = 50

[content]
language = "ja"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_file(&config_path).unwrap();

        assert_eq!(config.leaderboard.jitter, 50);
        // Unspecified field in the same section keeps its default.
        assert_eq!(config.leaderboard.floor_xp, 10);
        assert_eq!(config.content.language, "ja");
    }

    #[test]
    fn test_load_from_file_missing() {
        let result = Config::load_from_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = Config::load_from_file(&config_path);
        assert!(matches!(result, Err(SaffronError::Config { .. })));
    }

    #[test]
    #[serial]
    fn test_env_var_overrides() {
        env::set_var("SAFFRON_LEADERBOARD_JITTER", "25");
        env::set_var("SAFFRON_LEADERBOARD_FLOOR", "5");
        env::set_var("SAFFRON_LANGUAGE", "ko");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.leaderboard.jitter, 25);
        assert_eq!(config.leaderboard.floor_xp, 5);
        assert_eq!(config.content.language, "ko");

        env::remove_var("SAFFRON_LEADERBOARD_JITTER");
        env::remove_var("SAFFRON_LEADERBOARD_FLOOR");
        env::remove_var("SAFFRON_LANGUAGE");
    }

    #[test]
    #[serial]
    fn test_env_var_invalid_language_ignored() {
        env::set_var("SAFFRON_LANGUAGE", "klingon");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.content.language, "en");

        env::remove_var("SAFFRON_LANGUAGE");
    }

    #[test]
    #[serial]
    fn test_env_var_invalid_jitter_ignored() {
        env::set_var("SAFFRON_LEADERBOARD_JITTER", "not-a-number");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.leaderboard.jitter, 100);

        env::remove_var("SAFFRON_LEADERBOARD_JITTER");
    }

    #[test]
    fn test_is_valid_language() {
        assert!(ContentConfig::is_valid_language("en"));
        assert!(ContentConfig::is_valid_language("zh-tw"));
        assert!(ContentConfig::is_valid_language("ja"));
        assert!(ContentConfig::is_valid_language("ko"));

        assert!(!ContentConfig::is_valid_language(""));
        assert!(!ContentConfig::is_valid_language("EN")); // Case sensitive
        assert!(!ContentConfig::is_valid_language("fa"));
    }

    #[test]
    #[serial]
    fn test_saffron_home_with_env() {
        let dir = TempDir::new().unwrap();
        env::set_var("SAFFRON_HOME", dir.path().to_str().unwrap());

        let home = saffron_home().unwrap();
        assert_eq!(home, dir.path());

        env::remove_var("SAFFRON_HOME");
    }

    #[test]
    #[serial]
    fn test_saffron_home_fallback() {
        env::remove_var("SAFFRON_HOME");

        let home = saffron_home();
        assert!(home.is_some());
        assert!(home.unwrap().ends_with(".saffron"));
    }

    #[test]
    #[serial]
    fn test_saffron_home_empty_env() {
        env::set_var("SAFFRON_HOME", "");

        let home = saffron_home();
        assert!(home.is_some());
        assert!(home.unwrap().ends_with(".saffron"));

        env::remove_var("SAFFRON_HOME");
    }

    #[test]
    #[serial]
    fn test_derived_paths() {
        let dir = TempDir::new().unwrap();
        env::set_var("SAFFRON_HOME", dir.path().to_str().unwrap());

        assert_eq!(accounts_dir().unwrap(), dir.path().join("accounts"));
        assert_eq!(session_path().unwrap(), dir.path().join("session"));

        env::remove_var("SAFFRON_HOME");
    }

    #[test]
    fn test_full_toml_roundtrip() {
        let config = Config {
            leaderboard: LeaderboardConfig {
                jitter: 42,
                floor_xp: 1,
            },
            content: ContentConfig {
                language: "zh-tw".to_string(),
            },
        };

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }
}
