use std::fmt;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::http_client::{build_client, read_json, OneOrMany};
use super::{app_check, AnonymousSession, AuthConfig, FetchError};

/// An opaque identifier issued by DCInside, required by every further API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppId(String);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Anything capable of obtaining an app ID for a session.
pub trait AppIdFetcher {
    fn fetch_app_id(&self, session: AnonymousSession) -> Result<AppId, FetchError>;
}

/// The verification endpoint's response.
/// A successful response only has `result` and `app_id`.
#[derive(Deserialize, Debug)]
struct VerificationResponse {
    result: Option<bool>,
    app_id: Option<String>,
    cause: Option<String>,
}

/// Obtains app IDs from DCInside's mobile authentication endpoints.
#[derive(Debug)]
pub struct DcInsideAuth {
    client: Client,
    config: AuthConfig,
}

impl DcInsideAuth {
    pub fn new(config: AuthConfig) -> Result<Self, FetchError> {
        let client = build_client()?;
        Ok(Self { client, config })
    }

    /// Posts our value token alongside the app's identity.
    fn verify(&self, value_token: &str) -> Result<AppId, FetchError> {
        let identity = &self.config.identity;
        let mut form = vec![
            ("value_token", value_token),
            ("signature", identity.signature.as_str()),
            ("pkg", identity.package.as_str()),
            ("vCode", identity.version_code.as_str()),
            ("vName", identity.version_name.as_str()),
        ];
        if let Some(client_token) = &identity.client_token {
            form.push(("client_token", client_token.as_str()));
        }

        let response = self
            .client
            .post(&self.config.verification_url)
            .form(&form)
            .send()?;
        let records: OneOrMany<VerificationResponse> = read_json("app verification", response)?;
        let Some(verification) = records.into_first() else {
            return Err(FetchError::MissingAppId);
        };

        if verification.result == Some(false) {
            let cause = verification
                .cause
                .unwrap_or_else(|| "app verification was rejected".to_string());
            return Err(FetchError::Rejected(cause));
        }

        match verification.app_id {
            Some(app_id) if !app_id.is_empty() => Ok(AppId(app_id)),
            _ => Err(FetchError::MissingAppId),
        }
    }
}

impl AppIdFetcher for DcInsideAuth {
    /// Two requests: one for the server's date, and one to exchange its hash for an app ID.
    fn fetch_app_id(&self, session: AnonymousSession) -> Result<AppId, FetchError> {
        debug!(nickname = %session.nickname, "fetching app ID for anonymous session");

        let value_token = app_check::fetch_value_token(&self.client, &self.config.app_check_url)?;
        let app_id = self.verify(&value_token)?;

        info!("obtained app ID");
        Ok(app_id)
    }
}
