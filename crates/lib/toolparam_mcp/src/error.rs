use thiserror::Error;

/// Errors decoding a tool listing document.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No tool array found (expected `[...]`, `{{\"tools\": [...]}}` or `{{\"result\": {{\"tools\": [...]}}}}`)")]
    MissingTools,
}
