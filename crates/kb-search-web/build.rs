use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
struct SearchLayoutConfig {
    compact: bool,
}

#[derive(Debug, Default, Serialize)]
struct WebSearchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    index_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<usize>,
    layout: SearchLayoutConfig,
}

fn main() {
    println!("cargo:rerun-if-env-changed=KB_SEARCH_INDEX_URL");
    println!("cargo:rerun-if-env-changed=KB_SEARCH_PLACEHOLDER");
    println!("cargo:rerun-if-env-changed=KB_SEARCH_MAX_RESULTS");
    println!("cargo:rerun-if-env-changed=KB_SEARCH_COMPACT");

    if let Err(error) = write_search_config() {
        println!("cargo:warning=failed to generate search config: {error}");
    }
}

fn write_search_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let max_results = env_var_trimmed("KB_SEARCH_MAX_RESULTS").and_then(|raw| {
        match kb_search_core::config::parse_max_results(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                println!("cargo:warning=ignoring KB_SEARCH_MAX_RESULTS={raw}: {error}");
                None
            }
        }
    });

    let config = WebSearchConfig {
        index_url: env_var_trimmed("KB_SEARCH_INDEX_URL"),
        placeholder: env_var_trimmed("KB_SEARCH_PLACEHOLDER"),
        max_results,
        layout: SearchLayoutConfig {
            compact: env_var_trimmed("KB_SEARCH_COMPACT").is_some_and(|value| is_truthy(&value)),
        },
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("search-config.json"), content)?;
    Ok(())
}

fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let candidate = manifest_dir.join("..").join("..").join(".env");
    if candidate.exists() {
        let _ = dotenvy::from_path(candidate);
    }
}

fn env_var_trimmed(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
