use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for boardwalk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardwalkConfig {
    /// GitHub configuration
    pub github: GitHubConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubConfig {
    /// GitHub API token (can be set via env var)
    pub token: Option<String>,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Enable structured tracing output
    pub tracing_enabled: bool,
    /// Log level
    pub log_level: String,
}

impl Default for BoardwalkConfig {
    fn default() -> Self {
        Self {
            github: GitHubConfig {
                token: None, // Read from env var or boardwalk.toml
                owner: String::new(),
                repo: String::new(),
            },
            observability: ObservabilityConfig {
                tracing_enabled: true,
                log_level: "info".to_string(),
            },
        }
    }
}

impl BoardwalkConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (boardwalk.toml)
    /// 3. Environment variables (prefixed with BOARDWALK_)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if Path::new("boardwalk.toml").exists() {
            builder = builder.add_source(File::with_name("boardwalk"));
        }

        builder = builder.add_source(
            Environment::with_prefix("BOARDWALK")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut boardwalk_config: BoardwalkConfig = config.try_deserialize()?;

        // Special handling for the GitHub token - check multiple sources
        if boardwalk_config.github.token.is_none() {
            if let Ok(token) = std::env::var("GITHUB_TOKEN") {
                boardwalk_config.github.token = Some(token);
            } else if let Ok(token) = std::env::var("BOARDWALK_GITHUB_TOKEN") {
                boardwalk_config.github.token = Some(token);
            }
        }

        Ok(boardwalk_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<BoardwalkConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = BoardwalkConfig::load_env_file();
        BoardwalkConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static BoardwalkConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_repository_unset() {
        let config = BoardwalkConfig::default();
        assert!(config.github.token.is_none());
        assert!(config.github.owner.is_empty());
        assert!(config.github.repo.is_empty());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = BoardwalkConfig::default();
        config.github.owner = "acme".to_string();
        config.github.repo = "widgets".to_string();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boardwalk.toml");
        config.save_to_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let back: BoardwalkConfig = toml::from_str(&written).unwrap();
        assert_eq!(back.github.owner, "acme");
        assert_eq!(back.github.repo, "widgets");
        assert!(back.observability.tracing_enabled);
    }
}
