use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Two-character placeholder replaced with the encoded search text.
pub(crate) const PLACEHOLDER: &str = "{}";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub widgets: WidgetConfig,
}

impl Config {
    /// Load config from file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid JSON,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config: Self = serde_json::from_str(&content)?;
        config.search.validate()?;
        Ok(config)
    }

    /// Save config to file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Search overlay configuration. Built once at startup, read-only after.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Separates a command key from a trailing path segment.
    #[serde(default = "default_path_delimiter")]
    pub command_path_delimiter: char,

    /// Separates a command key from free-text search.
    #[serde(default = "default_search_delimiter")]
    pub command_search_delimiter: char,

    /// Template used when no command matches.
    #[serde(default = "default_search_template")]
    pub default_search_template: String,

    #[serde(default)]
    pub open_links_in_new_tab: bool,

    /// Maximum suggestions ever displayed.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl SearchConfig {
    /// Reject configurations the classifier cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when the default search template carries no
    /// placeholder.
    pub fn validate(&self) -> Result<()> {
        if !self.default_search_template.contains(PLACEHOLDER) {
            return Err(crate::Error::Config(format!(
                "defaultSearchTemplate must contain the {PLACEHOLDER} placeholder"
            )));
        }
        Ok(())
    }
}

fn default_path_delimiter() -> char {
    '/'
}
fn default_search_delimiter() -> char {
    ' '
}
fn default_search_template() -> String {
    "https://www.google.com/search?q={}".to_string()
}
fn default_suggestion_limit() -> usize {
    5
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            command_path_delimiter: default_path_delimiter(),
            command_search_delimiter: default_search_delimiter(),
            default_search_template: default_search_template(),
            open_links_in_new_tab: false,
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

/// Widget polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Base URL of the start-page backend.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_weather_poll")]
    pub weather_poll_secs: u64,

    #[serde(default = "default_player_poll")]
    pub player_poll_millis: u64,
}

fn default_api_base() -> String {
    "http://localhost:8000".to_string()
}
fn default_weather_poll() -> u64 {
    60
}
fn default_player_poll() -> u64 {
    1100
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            weather_poll_secs: default_weather_poll(),
            player_poll_millis: default_player_poll(),
        }
    }
}
