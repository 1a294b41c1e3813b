mod app_check;
mod app_id;
mod config;
mod constants;
mod error;
mod http_client;
mod session;

pub use app_id::{AppId, AppIdFetcher, DcInsideAuth};
pub use config::AuthConfig;
pub use error::FetchError;
pub use session::AnonymousSession;
