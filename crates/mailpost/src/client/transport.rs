//! HTTP delivery of built requests.

use std::fmt;
use std::future::Future;

use reqwest::Client;

use crate::error::TransportError;
use crate::payload::MailRequest;

/// Response header carrying SendGrid's message id.
const MESSAGE_ID_HEADER: &str = "x-message-id";

/// Connection reuse policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// One pooled HTTP client reused across sends.
    #[default]
    Persistent,
    /// A fresh HTTP client for every send.
    Transient,
}

/// An authenticated JSON POST handed to a [`Transport`].
#[derive(Clone)]
pub struct PostRequest {
    /// Target URL.
    pub url: String,
    /// Bearer token.
    pub api_key: String,
    /// JSON body.
    pub body: MailRequest,
}

impl fmt::Debug for PostRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostRequest")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("body", &self.body)
            .finish()
    }
}

/// Successful API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code (202 for an accepted send).
    pub status: u16,
    /// Value of the `X-Message-Id` header, if present.
    pub message_id: Option<String>,
    /// Raw response body, usually empty.
    pub body: String,
}

/// Delivers a [`PostRequest`].
///
/// Implementations own connection handling, TLS and timeouts. A non-success
/// HTTP status must be reported as an error.
pub trait Transport: Send + Sync + 'static {
    /// Sends one request and waits for the response.
    fn post(
        &self,
        request: PostRequest,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    pool: Pool,
}

#[derive(Debug, Clone)]
enum Pool {
    Shared(Client),
    PerRequest,
}

impl HttpTransport {
    /// Creates a transport for the given mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(mode: TransportMode) -> Result<Self, TransportError> {
        let pool = match mode {
            TransportMode::Persistent => Pool::Shared(Client::builder().build()?),
            TransportMode::Transient => Pool::PerRequest,
        };
        Ok(Self { pool })
    }

    /// Creates a persistent transport around an existing client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self {
            pool: Pool::Shared(client),
        }
    }

    /// Returns the transport's mode.
    #[must_use]
    pub const fn mode(&self) -> TransportMode {
        match self.pool {
            Pool::Shared(_) => TransportMode::Persistent,
            Pool::PerRequest => TransportMode::Transient,
        }
    }

    fn client(&self) -> Result<Client, TransportError> {
        match &self.pool {
            Pool::Shared(client) => Ok(client.clone()),
            Pool::PerRequest => Ok(Client::builder().build()?),
        }
    }
}

impl Transport for HttpTransport {
    async fn post(&self, request: PostRequest) -> Result<Response, TransportError> {
        let response = self
            .client()?
            .post(&request.url)
            .bearer_auth(&request.api_key)
            .json(&request.body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body must not hide the status.
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::status(status.as_u16(), body));
        }

        let message_id = response
            .headers()
            .get(MESSAGE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let body = response.text().await?;

        Ok(Response {
            status: status.as_u16(),
            message_id,
            body,
        })
    }
}
