use reqwest::StatusCode;
use thiserror::Error;

/// Anything that can go wrong while obtaining an app ID.
///
/// Callers generally don't care which of these occurred; the `Display`
/// output is what ends up in front of the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{endpoint} responded with {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Rejected(String),

    #[error("app check response did not contain a date")]
    MissingDate,

    #[error("verification response did not contain an app_id")]
    MissingAppId,
}
