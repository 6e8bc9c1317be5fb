// src/infrastructure/config.rs
use crate::constants::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// TOML configuration for both backends
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub video_base_url: String,
    #[serde(default = "default_base_url")]
    pub task_base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct HttpConfig {
    /// Request timeout in seconds; absent means wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            video_base_url: default_base_url(),
            task_base_url: default_base_url(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Explicit path must exist; the default location is optional.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(?path, "Loading config from explicit path");
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(path)
            }
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/boardview/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("boardview").join("config.toml"))
    }

    /// Command-line URLs take precedence over the file.
    pub fn with_overrides(mut self, video_url: Option<String>, task_url: Option<String>) -> Self {
        if let Some(url) = video_url {
            self.api.video_base_url = url;
        }
        if let Some(url) = task_url {
            self.api.task_base_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_default_config_when_serializing_then_omits_unset_timeout() {
        let content = toml::to_string_pretty(&Config::default()).unwrap();

        assert!(content.contains("[api]"));
        assert!(content.contains("task_base_url = \"http://localhost:5000\""));
        assert!(!content.contains("timeout_secs"));
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load.toml");
        fs::write(
            &config_path,
            r#"
[api]
video_base_url = "http://videos.local:8080"
task_base_url = "http://tasks.local:5000"

[http]
timeout_secs = 15
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.api.video_base_url, "http://videos.local:8080");
        assert_eq!(config.api.task_base_url, "http://tasks.local:5000");
        assert_eq!(config.http.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[api]\ntask_base_url = \"http://x\"\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.api.task_base_url, "http://x");
        assert_eq!(config.api.video_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.http.timeout(), None);
    }

    #[test]
    fn given_missing_explicit_path_when_loading_then_returns_error() {
        let result = Config::load_or_default(Some(Path::new("/nonexistent/boardview.toml")));

        assert!(result.is_err());
    }

    #[test]
    fn given_overrides_when_applied_then_replace_only_given_urls() {
        let config = Config::default().with_overrides(None, Some("http://tasks".to_string()));

        assert_eq!(config.api.video_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.task_base_url, "http://tasks");
    }

    #[test]
    fn given_serialized_config_file_when_loading_then_preserves_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roundtrip.toml");
        let original = Config {
            api: ApiConfig {
                video_base_url: "http://v".to_string(),
                ..Default::default()
            },
            http: HttpConfig {
                timeout_secs: Some(3),
            },
        };

        fs::write(&config_path, toml::to_string_pretty(&original).unwrap()).unwrap();

        assert_eq!(Config::load(&config_path).unwrap(), original);
    }
}
