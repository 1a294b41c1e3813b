use super::constants::{ANONYMOUS_NICKNAME, ANONYMOUS_PASSWORD};

/// An unregistered session, identified only by a nickname and passphrase.
///
/// Anonymous posters on DCInside pick a nickname and a per-post password
/// instead of logging in. We don't post anything, so we always use the
/// placeholder pair the official app suggests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymousSession {
    pub nickname: String,
    /// Only checked by the server when editing or deleting anonymous posts.
    #[allow(dead_code)]
    pub password: String,
}

impl AnonymousSession {
    /// Creates the fixed placeholder session. No requests are made here.
    pub fn new() -> Self {
        Self {
            nickname: ANONYMOUS_NICKNAME.to_string(),
            password: ANONYMOUS_PASSWORD.to_string(),
        }
    }
}

impl Default for AnonymousSession {
    fn default() -> Self {
        Self::new()
    }
}
