#![allow(clippy::doc_markdown, clippy::uninlined_format_args)]
//! Example: Send one email through SendGrid
//!
//! ## Prerequisites
//!
//! 1. Create an API key with "Mail Send" permission
//! 2. Verify a sender identity for the address you send from
//!
//! ## Running
//!
//! ```bash
//! export SENDGRID_API_KEY=SG.xxxxx
//! export SENDGRID_FROM=noreply@example.com
//! RUST_LOG=mailpost=debug cargo run --package mailpost --example send_email -- you@example.com
//! ```
//!
//! Pass `--live` to actually deliver; by default the request runs in sandbox
//! mode and is only validated by the API.

use anyhow::Context;
use mailpost::{Address, Email, MailClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let to = args.next().context("usage: send_email <recipient> [--live]")?;
    let live = args.any(|arg| arg == "--live");

    let client = MailClient::from_env()?;

    let email = Email::new(Address::new(to)?, "Hello from mailpost")
        .text("This message was sent with mailpost.")
        .html("<p>This message was sent with <strong>mailpost</strong>.</p>")
        .sandbox(!live);

    println!("Sending (sandbox: {})...", !live);
    let handle = client.send_deferred(email)?;
    let response = handle.await?;

    println!("✓ Accepted with status {}", response.status);
    if let Some(id) = response.message_id {
        println!("  Message id: {}", id);
    }
    Ok(())
}
