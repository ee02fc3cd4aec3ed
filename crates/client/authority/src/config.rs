//! Connection settings for the HTTP authority.
use std::env;
use std::time::Duration;

use crate::traits::AuthorityError;

/// Where the authority lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorityConfig {
    /// Base URL without the `/api` prefix.
    pub base_url: String,
    pub timeout: Duration,
}

impl AuthorityConfig {
    pub const DEFAULT_URL: &'static str = "http://127.0.0.1:8001";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_API_URL` - Authority base URL (default: http://127.0.0.1:8001)
    /// - `DUNGEON_API_TIMEOUT_MS` - Per-request timeout (default: 10000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("DUNGEON_API_URL") {
            let url = url.trim();
            if !url.is_empty() {
                config.base_url = url.to_string();
            }
        }

        if let Some(ms) = read_env::<u64>("DUNGEON_API_TIMEOUT_MS") {
            config.timeout = Duration::from_millis(ms.max(1));
        }

        config
    }

    /// Base URL with any trailing slash removed, checked for an http(s) scheme.
    pub fn normalized_url(&self) -> Result<String, AuthorityError> {
        let url = self.base_url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AuthorityError::Config(format!(
                "authority URL must start with http:// or https:// (got {:?})",
                self.base_url
            )));
        }
        Ok(url.to_string())
    }
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_URL)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
