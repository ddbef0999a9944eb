//! Config - Table Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, ROW_HEIGHT, TABLE_MAX_HEIGHT, TABLE_MIN_WIDTH,
};
use crate::error::{Error, Result};

/// Who owns pagination of the row array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// The table slices the full row array by its own page window
    #[default]
    Client,
    /// The caller supplies exactly one page of rows
    Server,
}

/// Table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page size a fresh table starts with
    pub default_page_size: usize,
    /// Choices offered by the rows-per-page selector
    pub page_size_options: Vec<usize>,
    /// Body row height in pixels
    pub row_height: f32,
    /// Container max height in pixels
    pub max_height: f32,
    /// Container min width in pixels
    pub min_width: f32,
    /// Pagination ownership
    pub mode: PaginationMode,
    /// UI language ("en", "zh"); detected from the system when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            row_height: ROW_HEIGHT,
            max_height: TABLE_MAX_HEIGHT,
            min_width: TABLE_MIN_WIDTH,
            mode: PaginationMode::Client,
            locale: None,
        }
    }
}

impl TableConfig {
    /// Parse a TOML document; blank input yields the defaults
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reject option sets the selector cannot present
    pub fn validate(&self) -> Result<()> {
        if self.page_size_options.is_empty() {
            return Err(Error::Invalid {
                message: "page_size_options must not be empty".to_string(),
            });
        }

        if self.page_size_options.contains(&0) {
            return Err(Error::Invalid {
                message: "page_size_options must not contain 0".to_string(),
            });
        }

        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(Error::Invalid {
                message: format!(
                    "default_page_size {} is not one of {:?}",
                    self.default_page_size, self.page_size_options
                ),
            });
        }

        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(Error::Invalid {
                message: format!("row_height must be positive, got {}", self.row_height),
            });
        }

        Ok(())
    }

    /// The configured option closest to `size` (ties pick the smaller)
    pub fn nearest_page_size(&self, size: usize) -> usize {
        self.page_size_options
            .iter()
            .copied()
            .min_by_key(|option| (option.abs_diff(size), *option))
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_document_gives_defaults() {
        let config = TableConfig::from_toml_str("  \n").expect("defaults");
        assert_eq!(config, TableConfig::default());
        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.page_size_options, vec![5, 10, 25, 50, 100]);
        assert_eq!(config.row_height, 53.0);
        assert_eq!(config.mode, PaginationMode::Client);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = TableConfig::from_toml_str(
            r#"
            default_page_size = 25
            mode = "server"
            locale = "zh"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.mode, PaginationMode::Server);
        assert_eq!(config.locale.as_deref(), Some("zh"));
        assert_eq!(config.page_size_options, vec![5, 10, 25, 50, 100]);
    }

    #[test]
    fn default_page_size_must_be_an_option() {
        let err = TableConfig::from_toml_str("default_page_size = 7").expect_err("invalid config");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[test]
    fn zero_option_is_rejected() {
        let err = TableConfig::from_toml_str(
            "page_size_options = [0, 5]\ndefault_page_size = 5",
        )
        .expect_err("invalid config");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = TableConfig::from_toml_str("default_page_size = = 5").expect_err("invalid config");
        assert!(matches!(err, Error::TomlDe { .. }));
    }

    #[test]
    fn toml_round_trip() {
        let config = TableConfig {
            mode: PaginationMode::Server,
            ..TableConfig::default()
        };
        let text = config.to_toml_string().expect("serialize");
        assert_eq!(TableConfig::from_toml_str(&text).expect("parse"), config);
    }

    #[test]
    fn nearest_page_size_snaps_to_options() {
        let config = TableConfig::default();
        assert_eq!(config.nearest_page_size(10), 10);
        assert_eq!(config.nearest_page_size(12), 10);
        assert_eq!(config.nearest_page_size(40), 50);
        assert_eq!(config.nearest_page_size(0), 5);
        assert_eq!(config.nearest_page_size(1000), 100);
    }
}
