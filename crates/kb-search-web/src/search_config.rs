//! Search box configuration loaded from build-time generated JSON.

use kb_search_core::SearchConfig;

/// Loads the generated search config JSON from `OUT_DIR`.
///
/// If parsing or validation fails, this logs a warning and returns the
/// default config so the box still renders (with an empty index).
pub fn load_search_config() -> SearchConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/search-config.json"));
    parse_search_config(raw)
}

fn parse_search_config(raw: &str) -> SearchConfig {
    SearchConfig::from_json(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse search config: {}", error);
        SearchConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generated_payload() {
        let raw = r#"
        {
          "index_url": "https://docs.example.com/search.json",
          "max_results": 8,
          "layout": { "compact": true }
        }
        "#;
        let config = parse_search_config(raw);
        assert_eq!(
            config.index_url.as_deref(),
            Some("https://docs.example.com/search.json")
        );
        assert_eq!(config.max_results, Some(8));
        assert!(config.layout.compact);
        assert_eq!(config.placeholder, "Search...");
    }

    #[test]
    fn invalid_payload_falls_back_to_defaults() {
        let config = parse_search_config(r#"{ "layout": { "compact": "sometimes" } }"#);
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn embedded_config_loads() {
        let config = load_search_config();
        assert!(!config.placeholder.is_empty());
    }
}
