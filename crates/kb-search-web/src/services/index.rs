//! Search document loading

use kb_search_core::{SearchConfig, StaticIndex};

use crate::error::AppError;

/// Fetch the site's search document and build an index over it.
///
/// Without a configured `index_url` the index starts empty.
pub async fn load_index(config: &SearchConfig) -> Result<StaticIndex, AppError> {
    let Some(url) = config.index_url.as_deref() else {
        tracing::info!("No search index URL configured; starting with an empty index");
        return Ok(StaticIndex::default());
    };

    tracing::debug!("Fetching search index from {}", url);
    let response = reqwest::Client::new()
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AppError::Status(response.status().as_u16()));
    }

    let body = response.text().await?;
    build_index(&body, config)
}

fn build_index(payload: &str, config: &SearchConfig) -> Result<StaticIndex, AppError> {
    let index = StaticIndex::from_json(payload)?.with_max_results(config.max_results);
    tracing::info!("Loaded search index with {} documents", index.len());
    Ok(index)
}
