//! Application Configuration
//!
//! User settings stored in TOML format.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tracker API settings
    pub api: ApiSettings,
    /// Dashboard view settings
    pub dashboard: DashboardSettings,
    /// Link handling
    pub navigation: NavigationSettings,
    /// Main window settings
    pub window: WindowSettings,
}

/// Tracker API connection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Server root, without the `/api` suffix
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Bearer token sent with every request
    pub auth_token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
            auth_token: None,
        }
    }
}

/// How the projects card treats long lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectListMode {
    /// Leave out the seventh project and show every other one
    #[default]
    SkipSeventh,
    /// Show only the first six projects
    FirstSix,
}

impl std::str::FromStr for ProjectListMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip_seventh" | "skip-seventh" => Ok(ProjectListMode::SkipSeventh),
            "first_six" | "first-six" => Ok(ProjectListMode::FirstSix),
            other => Err(format!(
                "unknown project list mode '{}' (expected skip_seventh or first_six)",
                other
            )),
        }
    }
}

/// Dashboard view settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Delay between mount and the entrance animation
    pub reveal_delay_ms: u64,
    /// Length of the card scale animation
    pub transition_ms: u64,
    /// Projects card list policy
    pub project_list: ProjectListMode,
    /// Card height in points
    pub card_height: f32,
    /// Scrollable list height inside each card
    pub list_height: f32,
    /// Side menu width in points
    pub sidebar_width: f32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 300,
            transition_ms: 500,
            project_list: ProjectListMode::SkipSeventh,
            card_height: 300.0,
            list_height: 150.0,
            sidebar_width: 192.0,
        }
    }
}

/// Where followed links go
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Web front end root; links open there in the browser when set
    pub web_base_url: Option<String>,
}

/// Main window size
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 720.0,
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();

        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.auth_token.is_none());

        assert_eq!(config.dashboard.reveal_delay_ms, 300);
        assert_eq!(config.dashboard.transition_ms, 500);
        assert_eq!(config.dashboard.project_list, ProjectListMode::SkipSeventh);
        assert!((config.dashboard.card_height - 300.0).abs() < 0.01);
        assert!((config.dashboard.list_height - 150.0).abs() < 0.01);

        assert!(config.navigation.web_base_url.is_none());
    }

    #[test]
    fn test_config_with_custom_values() {
        let mut config = AppConfig::default();
        config.api.base_url = "https://tracker.example.com".to_string();
        config.dashboard.project_list = ProjectListMode::FirstSix;
        config.navigation.web_base_url = Some("https://tracker.example.com/app".to_string());

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.api.base_url, "https://tracker.example.com");
        assert_eq!(parsed.dashboard.project_list, ProjectListMode::FirstSix);
        assert_eq!(
            parsed.navigation.web_base_url.as_deref(),
            Some("https://tracker.example.com/app")
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [dashboard]
            project_list = "first_six"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.dashboard.project_list, ProjectListMode::FirstSix);
        assert_eq!(parsed.dashboard.reveal_delay_ms, 300);
        assert_eq!(parsed.api.timeout_secs, 30);
    }

    #[test]
    fn test_save_and_load_config() {
        let mut config = AppConfig::default();
        config.dashboard.reveal_delay_ms = 150;

        let temp_file = NamedTempFile::new().unwrap();
        save_config(&config, temp_file.path()).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(loaded.dashboard.reveal_delay_ms, 150);
        assert_eq!(loaded.api.base_url, config.api.base_url);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "this is not valid toml {{{{").unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_project_list_mode_from_str() {
        assert_eq!(
            "skip_seventh".parse::<ProjectListMode>(),
            Ok(ProjectListMode::SkipSeventh)
        );
        assert_eq!("first-six".parse::<ProjectListMode>(), Ok(ProjectListMode::FirstSix));
        assert!("all".parse::<ProjectListMode>().is_err());
    }
}
