//! Search result record

use serde::{Deserialize, Serialize};

/// One unit of search output.
///
/// Produced by the search index; the view only reads these four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Stable identifier, used as the render key
    pub id: String,
    /// Page title
    pub title: String,
    /// Short text excerpt shown under the title
    #[serde(default)]
    pub excerpt: String,
    /// Site path navigated to on selection
    pub path: String,
}

impl SearchResult {
    /// Create a result record
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            path: path.into(),
        }
    }

    /// Text shown in the input once `item` is selected.
    ///
    /// The title for an item, the empty string otherwise.
    pub fn display_text(item: Option<&Self>) -> String {
        item.map(|result| result.title.clone()).unwrap_or_default()
    }
}
