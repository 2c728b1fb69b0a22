//! The mail client and its dispatch paths.

mod config;
mod handle;
mod transport;

pub use config::{ClientConfig, ClientConfigBuilder, ENV_API_KEY, ENV_FROM, ENV_FROM_NAME};
pub use handle::SendHandle;
pub use transport::{HttpTransport, PostRequest, Response, Transport, TransportMode};

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::message::Email;
use crate::payload::MailRequest;

/// Sends emails through the `mail/send` endpoint.
///
/// Configuration is fixed at construction and shared by every send. Each
/// send is a single attempt: no retries, no backoff.
#[derive(Debug)]
pub struct MailClient<T = HttpTransport> {
    config: Arc<ClientConfig>,
    transport: Arc<T>,
}

impl<T> Clone for MailClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl MailClient<HttpTransport> {
    /// Creates a client using the HTTP transport selected by
    /// `config.transport_mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.transport_mode)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client configured from the environment.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`] and [`MailClient::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> MailClient<T> {
    /// Creates a client around an existing transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the request body for an email without sending it.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the email cannot be composed.
    pub fn build(&self, email: Email) -> Result<MailRequest> {
        MailRequest::build(email, self.config.default_from.as_ref())
    }

    /// Sends an email and waits for the API to answer.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any I/O if the email is incomplete,
    /// or the transport's error if delivery fails.
    pub async fn send(&self, email: Email) -> Result<Response> {
        let request = self.prepare(email)?;
        dispatch(self.transport.as_ref(), request, self.config.transport_mode).await
    }

    /// Sends an email in the background.
    ///
    /// Validation runs before this returns; the HTTP call runs on the Tokio
    /// runtime and its outcome is observed by awaiting the returned handle.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the email is incomplete, or
    /// [`Error::Config`] when called outside a Tokio runtime.
    pub fn send_deferred(&self, email: Email) -> Result<SendHandle> {
        let request = self.prepare(email)?;
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| Error::Config(format!("deferred send needs a Tokio runtime: {e}")))?;
        let transport = Arc::clone(&self.transport);
        let mode = self.config.transport_mode;

        let task = runtime.spawn(async move { dispatch(transport.as_ref(), request, mode).await });
        Ok(SendHandle::new(task))
    }

    fn prepare(&self, email: Email) -> Result<PostRequest> {
        let body = self.build(email)?;
        Ok(PostRequest {
            url: self.config.send_url(),
            api_key: self.config.api_key.clone(),
            body,
        })
    }
}

async fn dispatch<T: Transport>(
    transport: &T,
    request: PostRequest,
    mode: TransportMode,
) -> Result<Response> {
    let url = request.url.clone();
    let recipients = request.body.recipient_count();
    tracing::debug!(%url, ?mode, recipients, "Sending mail");

    match transport.post(request).await {
        Ok(response) => {
            tracing::info!(
                status = response.status,
                message_id = response.message_id.as_deref(),
                "Mail accepted"
            );
            Ok(response)
        }
        Err(e) => {
            tracing::warn!(error = %e, %url, "Mail send failed");
            Err(e.into())
        }
    }
}
