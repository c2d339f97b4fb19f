use thiserror::Error;

/// Errors that can occur while looking up recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport failure (DNS, connect, TLS, timeout, body read)
    #[error("Request to recipe service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code
    #[error("Recipe service responded with status {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the expected `{"meals": [...]}` document
    #[error("Could not decode recipe service response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The search task ended without reporting a result
    #[error("Search was interrupted before it completed")]
    Interrupted,
}
