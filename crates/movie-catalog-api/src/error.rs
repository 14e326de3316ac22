use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the external catalog. Every variant carries the
/// operation name so the fetch boundary can log a useful diagnostic without
/// inspecting the variant.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{operation}: transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation}: catalog returned {status}: {body}")]
    Status {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("{operation}: failed to decode response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl CatalogError {
    pub fn operation(&self) -> &'static str {
        match self {
            CatalogError::Transport { operation, .. }
            | CatalogError::Status { operation, .. }
            | CatalogError::Decode { operation, .. } => operation,
        }
    }
}
