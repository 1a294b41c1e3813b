use super::constants;

/// How the official app identifies itself to the verification endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub signature: String,
    pub package: String,
    pub version_code: String,
    pub version_name: String,
    /// Push registration token. The official app sends its FCM token here;
    /// the endpoint accepts requests without one.
    pub client_token: Option<String>,
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            signature: constants::APP_SIGNATURE.to_string(),
            package: constants::APP_PACKAGE.to_string(),
            version_code: constants::APP_VERSION_CODE.to_string(),
            version_name: constants::APP_VERSION_NAME.to_string(),
            client_token: None,
        }
    }
}

/// Where and as whom we authenticate.
///
/// Only tests point this anywhere other than the production endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub app_check_url: String,
    pub verification_url: String,
    pub identity: AppIdentity,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            app_check_url: constants::APP_CHECK_ENDPOINT.to_string(),
            verification_url: constants::APP_VERIFICATION_ENDPOINT.to_string(),
            identity: AppIdentity::default(),
        }
    }
}
