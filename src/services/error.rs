// src/services/error.rs
use reqwest::StatusCode;

pub type FetchResult<T> = Result<T, FetchError>;

/// Why a fetch produced no data. The report collapses every variant into
/// "absent" after logging it; the fetch check binary and tests keep the
/// distinction.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("POLYGON_API_KEY environment variable not set")]
    MissingCredential,

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}")]
    HttpStatus {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("{endpoint} returned a malformed response: {source}")]
    Malformed {
        endpoint: &'static str,
        source: reqwest::Error,
    },

    #[error("{endpoint} response is missing {field}")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
    },
}
