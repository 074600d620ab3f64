//! API call failures.

use thiserror::Error;

/// Why a single API call produced no record. The caller decides whether that
/// is fatal (challenge list) or degrades (challenge detail).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),
    #[error("server returned HTTP {0}")]
    Http(u32),
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}
