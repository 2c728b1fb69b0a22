//! The caller-facing description of one email to send.

use std::collections::BTreeMap;

use crate::types::{Address, Recipients, TEXT_HTML, TEXT_PLAIN};

/// An email to compose and send.
///
/// Addresses and recipient lists are validated when they are created, so an
/// `Email` only holds valid parts. Cross-field checks (sender resolution,
/// non-empty content) happen when the payload is built.
#[derive(Debug, Clone)]
pub struct Email {
    /// Primary recipients.
    pub to: Recipients,
    /// Carbon-copy recipients.
    pub cc: Option<Recipients>,
    /// Blind carbon-copy recipients.
    pub bcc: Option<Recipients>,
    /// Sender; falls back to the client default when `None`.
    pub from: Option<Address>,
    /// Reply-to address.
    pub reply_to: Option<Address>,
    /// Subject line.
    pub subject: String,
    /// Body parts keyed by MIME type.
    pub content: BTreeMap<String, String>,
    /// Ask the API to validate without delivering.
    pub sandbox: bool,
}

impl Email {
    /// Creates an email with recipients and a subject.
    #[must_use]
    pub fn new(to: impl Into<Recipients>, subject: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            cc: None,
            bcc: None,
            from: None,
            reply_to: None,
            subject: subject.into(),
            content: BTreeMap::new(),
            sandbox: false,
        }
    }

    /// Sets the CC recipients.
    #[must_use]
    pub fn cc(mut self, cc: impl Into<Recipients>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    /// Sets the BCC recipients.
    #[must_use]
    pub fn bcc(mut self, bcc: impl Into<Recipients>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }

    /// Sets the sender for this email only.
    #[must_use]
    pub fn from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the reply-to address.
    #[must_use]
    pub fn reply_to(mut self, reply_to: Address) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    /// Adds a body part, replacing any previous part of the same type.
    #[must_use]
    pub fn content(mut self, mime_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.content.insert(mime_type.into(), value.into());
        self
    }

    /// Adds a `text/plain` body.
    #[must_use]
    pub fn text(self, body: impl Into<String>) -> Self {
        self.content(TEXT_PLAIN, body)
    }

    /// Adds a `text/html` body.
    #[must_use]
    pub fn html(self, body: impl Into<String>) -> Self {
        self.content(TEXT_HTML, body)
    }

    /// Enables or disables sandbox mode.
    #[must_use]
    pub const fn sandbox(mut self, enable: bool) -> Self {
        self.sandbox = enable;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_email_builder() {
        let email = Email::new(Address::new("b@x.com").unwrap(), "Hi")
            .cc(Recipients::parse(["c@x.com", "d@x.com"]).unwrap())
            .reply_to(Address::new("r@x.com").unwrap())
            .text("hello")
            .html("<p>hello</p>")
            .sandbox(true);

        assert_eq!(email.to.len(), 1);
        assert_eq!(email.cc.as_ref().map(Recipients::len), Some(2));
        assert!(email.bcc.is_none());
        assert!(email.from.is_none());
        assert_eq!(email.content.len(), 2);
        assert_eq!(email.content["text/plain"], "hello");
        assert!(email.sandbox);
    }

    #[test]
    fn test_content_replaces_same_type() {
        let email = Email::new(Address::new("b@x.com").unwrap(), "Hi")
            .text("first")
            .content("text/plain", "second");
        assert_eq!(email.content.len(), 1);
        assert_eq!(email.content["text/plain"], "second");
    }
}
