use reqwest::blocking::{Client, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::{constants, FetchError};

/// Creates a blocking client that presents itself as the mobile app.
///
/// The app sends the same user agent and referer on every request,
/// so we set them once as default headers.
pub fn build_client() -> Result<Client, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(constants::USER_AGENT),
    );
    headers.insert(header::REFERER, HeaderValue::from_static(constants::REFERER));

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

/// Ensures the request succeeded, and parses its body as JSON.
///
/// We (naively) assume that any request resulting in an error will have
/// a non-2xx response code. Rejections with a 200 are handled by callers.
pub fn read_json<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { endpoint, status });
    }

    let body = response.text()?;
    debug!(endpoint, %body, "received response");
    Ok(serde_json::from_str(&body)?)
}

/// DCInside's JSON endpoints wrap their record in a single-element array,
/// though not consistently. We accept either shape.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The record we care about, if any was sent at all.
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::Many(records) => records.into_iter().next(),
            OneOrMany::One(record) => Some(record),
        }
    }
}
