use reqwest::blocking::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::constants::VALUE_TOKEN_PREFIX;
use super::http_client::{read_json, OneOrMany};
use super::FetchError;

/// The app check record. The server sends plenty more (`ver`, `notice`, ...)
/// but we only need to know whether it's happy, and its current date.
#[derive(Deserialize, Debug)]
struct AppCheck {
    result: Option<bool>,
    date: Option<String>,
}

/// Hashes the app check date into the token the verification endpoint expects.
pub fn value_token(date: &str) -> String {
    let digest = Sha256::digest(format!("{VALUE_TOKEN_PREFIX}{date}").as_bytes());
    hex::encode(digest)
}

/// Asks the server for its current app check date, and derives a value token from it.
pub fn fetch_value_token(client: &Client, app_check_url: &str) -> Result<String, FetchError> {
    let response = client.get(app_check_url).send()?;
    let records: OneOrMany<AppCheck> = read_json("app check", response)?;

    let Some(check) = records.into_first() else {
        return Err(FetchError::MissingDate);
    };
    if check.result == Some(false) {
        return Err(FetchError::Rejected("app check was rejected".to_string()));
    }

    match check.date {
        Some(date) if !date.is_empty() => {
            debug!(%date, "obtained app check date");
            Ok(value_token(&date))
        }
        _ => Err(FetchError::MissingDate),
    }
}
