//! # mailpost
//!
//! A minimal client for the SendGrid v3 `mail/send` endpoint.
//!
//! ## Features
//!
//! - **Validated inputs**: addresses and recipient lists are checked once,
//!   when they are created
//! - **Canonical body order**: `text/plain`, then `text/html`, then the rest
//! - **Fail fast**: every validation error is raised before any network I/O
//! - **Blocking or deferred dispatch**: await the send, or get a handle back
//!   and observe the outcome later
//! - **Pluggable transport**: `reqwest` by default, any [`Transport`] for tests
//!   or proxies
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailpost::{Address, ClientConfig, Email, MailClient};
//!
//! #[tokio::main]
//! async fn main() -> mailpost::Result<()> {
//!     let config = ClientConfig::builder("SG.xxxxx")
//!         .default_from(Address::with_name("noreply@example.com", "Example")?)
//!         .build();
//!     let client = MailClient::new(config)?;
//!
//!     let email = Email::new(Address::new("user@example.com")?, "Welcome")
//!         .text("Hello!")
//!         .html("<p>Hello!</p>");
//!
//!     // Wait for the API to answer
//!     let response = client.send(email.clone()).await?;
//!     println!("Accepted: {:?}", response.message_id);
//!
//!     // Or let it run in the background
//!     let handle = client.send_deferred(email)?;
//!     handle.await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`]: Mail client, configuration and transports
//! - [`message`]: The email to compose
//! - [`payload`]: The JSON request body
//! - [`types`]: Addresses, recipient lists and body parts

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod client;
mod error;
pub mod message;
pub mod payload;
pub mod types;

pub use client::{
    ClientConfig, HttpTransport, MailClient, PostRequest, Response, SendHandle, Transport,
    TransportMode,
};
pub use error::{Error, Result, TransportError};
pub use message::Email;
pub use payload::MailRequest;
pub use types::{Address, Content, MAX_RECIPIENTS, Recipients};

/// Default SendGrid API base URL.
pub const SENDGRID_API_URL: &str = "https://sendgrid.com/v3";
