//! Persisted settings
//!
//! Loads the table configuration from the platform config directory and
//! resolves the UI locale.

use std::path::PathBuf;

use locale_config::Locale;
use tracing::{error, info};

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::TableConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Languages with a bundled translation
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Load the table config, creating an empty file on first run
pub fn load_table_config() -> Result<TableConfig> {
    let path = get_config_path()?;
    info!(path = ?path, "Loading config file");
    let value = std::fs::read_to_string(&path)?;

    TableConfig::from_toml_str(&value).inspect_err(|e| {
        error!(error = %e, path = ?path, "Failed to load config file");
    })
}

/// Language for UI strings: the configured one when supported, otherwise the
/// system language when supported, otherwise English.
pub fn resolve_locale(configured: Option<&str>) -> String {
    let system = Locale::current().to_string();
    pick_locale(configured, &system)
}

fn pick_locale(configured: Option<&str>, system: &str) -> String {
    let language = |tag: &str| {
        tag.split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    };

    [configured.unwrap_or_default(), system]
        .into_iter()
        .map(language)
        .find(|lang| SUPPORTED_LOCALES.contains(&lang.as_str()))
        .unwrap_or_else(|| "en".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_locale_wins() {
        assert_eq!(pick_locale(Some("zh"), "en-US"), "zh");
        assert_eq!(pick_locale(Some("zh_CN"), "en-US"), "zh");
    }

    #[test]
    fn falls_back_to_system_language() {
        assert_eq!(pick_locale(None, "zh-CN"), "zh");
        assert_eq!(pick_locale(Some("fr"), "zh-Hans-CN"), "zh");
    }

    #[test]
    fn unsupported_everything_is_english() {
        assert_eq!(pick_locale(None, "de-DE"), "en");
        assert_eq!(pick_locale(Some(""), ""), "en");
    }
}
