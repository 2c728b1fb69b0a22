//! Client configuration.

use std::fmt;

use super::transport::TransportMode;
use crate::SENDGRID_API_URL;
use crate::error::{Error, Result};
use crate::types::Address;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "SENDGRID_API_KEY";
/// Environment variable holding the default sender email.
pub const ENV_FROM: &str = "SENDGRID_FROM";
/// Environment variable holding the default sender display name.
pub const ENV_FROM_NAME: &str = "SENDGRID_FROM_NAME";

/// Settings shared by every send issued through one client.
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Sender used when an email has no `from`.
    pub default_from: Option<Address>,
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Connection reuse policy for the HTTP transport.
    pub transport_mode: TransportMode,
}

impl ClientConfig {
    /// Creates a configuration with no default sender.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder(api_key).build()
    }

    /// Creates a configuration builder.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(api_key)
    }

    /// Reads the configuration from `SENDGRID_API_KEY`, `SENDGRID_FROM` and
    /// `SENDGRID_FROM_NAME`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the API key is missing, or
    /// [`Error::InvalidAddress`] if the default sender is malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{ENV_API_KEY} is not set")))?;

        let default_from = match (lookup(ENV_FROM), lookup(ENV_FROM_NAME)) {
            (Some(email), Some(name)) => Some(Address::with_name(email, name)?),
            (Some(email), None) => Some(Address::new(email)?),
            (None, _) => None,
        };

        let mut builder = Self::builder(api_key);
        if let Some(from) = default_from {
            builder = builder.default_from(from);
        }
        Ok(builder.build())
    }

    /// Full URL of the send endpoint.
    #[must_use]
    pub fn send_url(&self) -> String {
        format!("{}/mail/send", self.base_url)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("default_from", &self.default_from)
            .field("base_url", &self.base_url)
            .field("transport_mode", &self.transport_mode)
            .finish()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Creates a builder with the default endpoint and a persistent transport.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: ClientConfig {
                api_key: api_key.into(),
                default_from: None,
                base_url: SENDGRID_API_URL.to_string(),
                transport_mode: TransportMode::default(),
            },
        }
    }

    /// Sets the default sender.
    #[must_use]
    pub fn default_from(mut self, from: Address) -> Self {
        self.config.default_from = Some(from);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.config.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the transport mode.
    #[must_use]
    pub const fn transport_mode(mut self, mode: TransportMode) -> Self {
        self.config.transport_mode = mode;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
