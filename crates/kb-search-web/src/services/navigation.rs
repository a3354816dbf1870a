//! Page navigation for selected results

use dioxus::prelude::*;

use crate::error::AppError;

/// Navigate the page to `path`.
///
/// Runs on the Dioxus runtime; must be called from an event handler or
/// component scope.
pub fn navigate(path: String) {
    tracing::info!("Navigating to {}", path);
    spawn(async move {
        if let Err(error) = assign_location(&path).await {
            tracing::error!("Failed to navigate to {}: {}", path, error);
        }
    });
}

async fn assign_location(path: &str) -> Result<(), AppError> {
    let script = location_script(path)?;
    let _: serde_json::Value = document::eval(&script)
        .join()
        .await
        .map_err(|error| AppError::Navigation(error.to_string()))?;
    Ok(())
}

/// Script that points `window.location` at `path`.
///
/// The path is embedded as a JSON string literal so quotes and other
/// characters from the search document cannot break out of the call.
fn location_script(path: &str) -> Result<String, AppError> {
    let literal = serde_json::to_string(path)?;
    Ok(format!("window.location.assign({literal}); return null;"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_script_quotes_path() {
        assert_eq!(
            location_script("/docs/intro").unwrap(),
            r#"window.location.assign("/docs/intro"); return null;"#
        );
    }

    #[test]
    fn location_script_escapes_quotes() {
        let script = location_script(r#"/a"); alert("x"#).unwrap();
        assert!(script.contains(r#""/a\"); alert(\"x""#));
    }
}
