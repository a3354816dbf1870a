//! Search box configuration.
//!
//! Provides `SearchConfig`, the build-provisioned settings for the widget:
//! where the search document lives, input placeholder, result cap, and the
//! dropdown layout.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Vertical gap between the input box and the dropdown, in pixels
pub const DEFAULT_MENU_GAP_PX: f64 = 10.0;
/// Fixed left offset of the dropdown in compact layout, in pixels
pub const DEFAULT_COMPACT_MARGIN_PX: f64 = 10.0;

const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Dropdown placement settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Compact (mobile) layout pins the dropdown to a fixed left margin
    #[serde(default)]
    pub compact: bool,
    #[serde(default = "default_menu_gap")]
    pub menu_gap: f64,
    #[serde(default = "default_compact_margin")]
    pub compact_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            compact: false,
            menu_gap: DEFAULT_MENU_GAP_PX,
            compact_margin: DEFAULT_COMPACT_MARGIN_PX,
        }
    }
}

impl LayoutConfig {
    /// Same layout with the compact flag replaced
    #[must_use]
    pub const fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

/// Widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// URL of the JSON search document; no index when absent
    #[serde(default)]
    pub index_url: Option<String>,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Upper bound on rendered results
    #[serde(default)]
    pub max_results: Option<usize>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_url: None,
            placeholder: default_placeholder(),
            max_results: None,
            layout: LayoutConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a config payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(payload)?;
        config.validated()
    }

    /// Normalize fields and reject values the layout cannot use.
    pub fn validated(mut self) -> Result<Self> {
        self.index_url = normalize_text_option(self.index_url);
        if let Some(url) = self.index_url.as_deref() {
            if !is_http_url(url) {
                return Err(Error::InvalidConfig(
                    "index_url must include http:// or https://".to_string(),
                ));
            }
        }
        if self.placeholder.trim().is_empty() {
            self.placeholder = default_placeholder();
        }
        validate_max_results(self.max_results)?;
        validate_offset(self.layout.menu_gap, "menu_gap")?;
        validate_offset(self.layout.compact_margin, "compact_margin")?;
        Ok(self)
    }
}

/// Parse a result cap from text, as supplied through the environment.
///
/// The cap must be a positive integer.
pub fn parse_max_results(raw: &str) -> Result<usize> {
    let value: usize = raw.trim().parse().map_err(|error| {
        Error::InvalidConfig(format!("max_results '{}' is not a number: {error}", raw.trim()))
    })?;
    validate_max_results(Some(value))?;
    Ok(value)
}

fn validate_max_results(value: Option<usize>) -> Result<()> {
    if value == Some(0) {
        return Err(Error::InvalidConfig(
            "max_results must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn validate_offset(value: f64, field: &str) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "layout field '{field}' must be a finite, non-negative pixel value"
        )))
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

const fn default_menu_gap() -> f64 {
    DEFAULT_MENU_GAP_PX
}

const fn default_compact_margin() -> f64 {
    DEFAULT_COMPACT_MARGIN_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = SearchConfig::from_json("{}").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.placeholder, "Search...");
        assert!((config.layout.menu_gap - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_unknown_fields() {
        let error = SearchConfig::from_json(r#"{"theme": "dark"}"#).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn normalizes_blank_index_url() {
        let config = SearchConfig::from_json(r#"{"index_url": "   "}"#).unwrap();
        assert_eq!(config.index_url, None);
    }

    #[test]
    fn rejects_relative_index_url() {
        let error = SearchConfig::from_json(r#"{"index_url": "/search.json"}"#).unwrap_err();
        assert!(error.to_string().contains("index_url"));
    }

    #[test]
    fn rejects_zero_max_results() {
        let error = SearchConfig::from_json(r#"{"max_results": 0}"#).unwrap_err();
        assert!(error.to_string().contains("max_results"));
    }

    #[test]
    fn parse_max_results_accepts_positive_caps() {
        assert_eq!(parse_max_results(" 8 ").unwrap(), 8);
    }

    #[test]
    fn parse_max_results_rejects_zero_and_garbage() {
        let zero = parse_max_results("0").unwrap_err();
        assert!(zero.to_string().contains("greater than zero"));
        let garbage = parse_max_results("many").unwrap_err();
        assert!(garbage.to_string().contains("not a number"));
    }

    #[test]
    fn rejects_negative_gap() {
        let error = SearchConfig::from_json(r#"{"layout": {"menu_gap": -4.0}}"#).unwrap_err();
        assert!(error.to_string().contains("menu_gap"));
    }

    #[test]
    fn reads_compact_flag() {
        let config = SearchConfig::from_json(r#"{"layout": {"compact": true}}"#).unwrap();
        assert!(config.layout.compact);
        assert!((config.layout.compact_margin - 10.0).abs() < f64::EPSILON);
    }
}
