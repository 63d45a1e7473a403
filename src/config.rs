//! Configuration for probe runs

use std::time::Duration;

use crate::error::{ProbeError, ProbeResult};

pub const DEFAULT_BASE_URL: &str = "https://api.ok.ru/fb.do";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment fallbacks consulted by [`ProbeConfig::from_args`]
pub const ENV_BASE_URL: &str = "OK_BASE_URL";
pub const ENV_APPLICATION_KEY: &str = "OK_APPLICATION_KEY";
pub const ENV_SECRET_KEY: &str = "OK_SECRET_KEY";
pub const ENV_UID: &str = "OK_UID";

/// Everything a [`crate::client::GroupsClient`] needs to reach the API
///
/// Passed by value into the client so that several probes with different
/// credentials or endpoints can run side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Endpoint every request is sent to
    pub base_url: String,
    pub application_key: String,
    /// Shared secret appended to the canonical string before hashing
    pub secret_key: String,
    /// User whose groups are listed
    pub uid: String,
    /// Whole-request timeout applied by the HTTP client
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            application_key: String::new(),
            secret_key: String::new(),
            uid: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProbeConfig {
    pub fn new(
        application_key: impl Into<String>,
        secret_key: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            application_key: application_key.into(),
            secret_key: secret_key.into(),
            uid: uid.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from parsed command-line arguments, falling back to `OK_*`
    /// environment variables and then to defaults
    pub fn from_args(matches: &clap::ArgMatches) -> ProbeResult<Self> {
        let lookup = |arg: &str, env: &str| -> Option<String> {
            matches
                .get_one::<String>(arg)
                .cloned()
                .or_else(|| std::env::var(env).ok())
        };

        let timeout = match matches.get_one::<String>("timeout") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                ProbeError::InvalidConfig(format!("timeout must be whole seconds, got {}", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            base_url: lookup("base_url", ENV_BASE_URL)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            application_key: lookup("application_key", ENV_APPLICATION_KEY).unwrap_or_default(),
            secret_key: lookup("secret", ENV_SECRET_KEY).unwrap_or_default(),
            uid: lookup("uid", ENV_UID).unwrap_or_default(),
            timeout: Duration::from_secs(timeout),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that can never produce a request
    ///
    /// Empty credentials are accepted: the remote API reports them and some
    /// probes rely on that.
    pub fn validate(&self) -> ProbeResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ProbeError::InvalidConfig(
                "base_url must not be empty".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ProbeError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
