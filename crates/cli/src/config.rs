//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stats_view_domain::{GranularFamily, InsightKind};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub dispatchers: DispatcherConfig,

    #[serde(default)]
    pub wiring: WiringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_id")]
    pub id: u64,

    #[serde(default = "default_site_name")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatcherConfig {
    #[serde(default = "default_main_dispatcher")]
    pub main: String,

    #[serde(default = "default_background_dispatcher")]
    pub background: String,
}

/// Providers injected into the view-all builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WiringConfig {
    #[serde(default = "default_granular_families")]
    pub granular_families: Vec<GranularFamily>,

    #[serde(default = "default_insights")]
    pub insights: Vec<InsightKind>,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_site_id() -> u64 {
    1
}

fn default_site_name() -> String {
    "example.blog".to_string()
}

fn default_main_dispatcher() -> String {
    "ui".to_string()
}

fn default_background_dispatcher() -> String {
    "bg".to_string()
}

fn default_granular_families() -> Vec<GranularFamily> {
    GranularFamily::ALL.to_vec()
}

fn default_insights() -> Vec<InsightKind> {
    InsightKind::ALL.to_vec()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            id: default_site_id(),
            name: default_site_name(),
        }
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            main: default_main_dispatcher(),
            background: default_background_dispatcher(),
        }
    }
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self {
            granular_families: default_granular_families(),
            insights: default_insights(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("STATS_VIEW")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# stats-view configuration

[general]
log_level = "info"

[site]
id = 1
name = "example.blog"

[dispatchers]
main = "ui"
background = "bg"

# Providers handed to the view-all builder. Dropping an entry makes every
# view served by it fail with a wiring error (see `stats-view doctor`).
[wiring]
granular_families = ["posts_and_pages", "clicks", "authors", "country_views", "search_terms"]
insights = [
    "followers",
    "comments",
    "tags_and_categories",
    "all_time",
    "latest_post_summary",
    "most_popular",
    "today",
    "publicize",
    "post_months_and_years",
    "post_average_views_per_day",
]
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_toml_parses_to_defaults() {
        let parsed: AppConfig = toml::from_str(&AppConfig::example_toml()).unwrap();
        let defaults = AppConfig::default();

        assert_eq!(parsed.site.id, defaults.site.id);
        assert_eq!(parsed.dispatchers.main, defaults.dispatchers.main);
        assert_eq!(
            parsed.wiring.granular_families,
            defaults.wiring.granular_families
        );
        assert_eq!(parsed.wiring.insights, defaults.wiring.insights);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let parsed: AppConfig = toml::from_str("[site]\nid = 9\n").unwrap();

        assert_eq!(parsed.site.id, 9);
        assert_eq!(parsed.site.name, "example.blog");
        assert_eq!(parsed.wiring.insights.len(), InsightKind::ALL.len());
    }

    #[test]
    fn test_load_rejects_missing_explicit_path() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/stats-view.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
