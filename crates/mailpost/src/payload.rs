//! The JSON body of a `mail/send` request.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::message::Email;
use crate::types::{Address, Content, Recipients, assemble};

/// Request body for `POST /v3/mail/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailRequest {
    /// Sender.
    pub from: Address,
    /// Recipient blocks; always exactly one.
    pub personalizations: Vec<Personalization>,
    /// Subject line.
    pub subject: String,
    /// Ordered body parts.
    pub content: Vec<Content>,
    /// Reply-to address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Address>,
    /// Provider-side settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_settings: Option<MailSettings>,
}

/// Recipients that share one copy of the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Personalization {
    /// Primary recipients.
    pub to: Recipients,
    /// Carbon-copy recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    /// Blind carbon-copy recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
}

/// `mail_settings` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MailSettings {
    /// Sandbox mode toggle.
    pub sandbox_mode: SandboxMode,
}

/// `mail_settings.sandbox_mode` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SandboxMode {
    /// When true the API validates the request but does not deliver it.
    pub enable: bool,
}

impl MailSettings {
    const fn sandbox() -> Self {
        Self {
            sandbox_mode: SandboxMode { enable: true },
        }
    }
}

impl MailRequest {
    /// Composes a request from an email.
    ///
    /// The sender is the email's own `from`, else `default_from`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFromAddress`] if neither sender is set, and
    /// [`Error::EmptyContent`] if the email has no body parts.
    pub fn build(email: Email, default_from: Option<&Address>) -> Result<Self> {
        let from = email
            .from
            .or_else(|| default_from.cloned())
            .ok_or(Error::MissingFromAddress)?;

        if email.content.is_empty() {
            return Err(Error::EmptyContent);
        }

        let request = Self {
            from,
            personalizations: vec![Personalization {
                to: email.to,
                cc: email.cc,
                bcc: email.bcc,
            }],
            subject: email.subject,
            content: assemble(email.content),
            reply_to: email.reply_to,
            mail_settings: email.sandbox.then(MailSettings::sandbox),
        };

        tracing::debug!(
            recipients = request.recipient_count(),
            parts = request.content.len(),
            sandbox = email.sandbox,
            "Built mail request"
        );

        Ok(request)
    }

    /// Total number of addresses across `to`, `cc` and `bcc`.
    #[must_use]
    pub fn recipient_count(&self) -> usize {
        self.personalizations
            .iter()
            .map(|p| {
                p.to.len()
                    + p.cc.as_ref().map_or(0, Recipients::len)
                    + p.bcc.as_ref().map_or(0, Recipients::len)
            })
            .sum()
    }

    /// Returns true if sandbox mode is enabled.
    #[must_use]
    pub fn is_sandbox(&self) -> bool {
        self.mail_settings.is_some_and(|s| s.sandbox_mode.enable)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn addr(email: &str) -> Address {
        Address::new(email).unwrap()
    }

    fn email() -> Email {
        Email::new(addr("b@x.com"), "Hi").text("hello")
    }

    #[test]
    fn test_end_to_end_shape() {
        let email = Email::new(Address::with_name("b@x.com", "B").unwrap(), "Hi")
            .from(Address::with_name("a@x.com", "A").unwrap())
            .text("hello");

        let request = MailRequest::build(email, None).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "from": { "email": "a@x.com", "name": "A" },
                "personalizations": [{ "to": [{ "email": "b@x.com", "name": "B" }] }],
                "subject": "Hi",
                "content": [{ "type": "text/plain", "value": "hello" }],
            })
        );
    }

    #[test]
    fn test_call_from_overrides_default() {
        let default = addr("default@x.com");
        let request = MailRequest::build(email().from(addr("call@x.com")), Some(&default)).unwrap();
        assert_eq!(request.from.email(), "call@x.com");
    }

    #[test]
    fn test_default_from_used() {
        let default = addr("default@x.com");
        let request = MailRequest::build(email(), Some(&default)).unwrap();
        assert_eq!(request.from, default);
    }

    #[test]
    fn test_missing_from() {
        let err = MailRequest::build(email(), None).unwrap_err();
        assert!(matches!(err, Error::MissingFromAddress));
    }

    #[test]
    fn test_empty_content() {
        let email = Email::new(addr("b@x.com"), "Hi").from(addr("a@x.com"));
        let err = MailRequest::build(email, None).unwrap_err();
        assert!(matches!(err, Error::EmptyContent));
    }

    #[test]
    fn test_missing_from_checked_before_content() {
        let email = Email::new(addr("b@x.com"), "Hi");
        let err = MailRequest::build(email, None).unwrap_err();
        assert!(matches!(err, Error::MissingFromAddress));
    }

    #[test]
    fn test_sandbox_enabled() {
        let request =
            MailRequest::build(email().from(addr("a@x.com")).sandbox(true), None).unwrap();
        assert!(request.is_sandbox());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["mail_settings"], json!({ "sandbox_mode": { "enable": true } }));
    }

    #[test]
    fn test_sandbox_absent_when_disabled() {
        for email in [email(), email().sandbox(false)] {
            let request = MailRequest::build(email.from(addr("a@x.com")), None).unwrap();
            assert!(!request.is_sandbox());
            let json = serde_json::to_value(&request).unwrap();
            assert!(json.get("mail_settings").is_none());
        }
    }

    #[test]
    fn test_optional_fields() {
        let email = email()
            .from(addr("a@x.com"))
            .cc(addr("c@x.com"))
            .bcc(Recipients::parse(["d@x.com", "e@x.com"]).unwrap())
            .reply_to(addr("r@x.com"));

        let request = MailRequest::build(email, None).unwrap();
        assert_eq!(request.personalizations.len(), 1);
        assert_eq!(request.recipient_count(), 4);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["reply_to"], json!({ "email": "r@x.com" }));
        assert_eq!(json["personalizations"][0]["cc"], json!([{ "email": "c@x.com" }]));
        assert_eq!(
            json["personalizations"][0]["bcc"],
            json!([{ "email": "d@x.com" }, { "email": "e@x.com" }])
        );
    }

    #[test]
    fn test_absent_cc_bcc_reply_to_are_omitted() {
        let request = MailRequest::build(email().from(addr("a@x.com")), None).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("reply_to").is_none());
        let block = json["personalizations"][0].as_object().unwrap();
        assert_eq!(block.keys().collect::<Vec<_>>(), ["to"]);
    }

    #[test]
    fn test_content_ordered() {
        let email = Email::new(addr("b@x.com"), "Hi")
            .from(addr("a@x.com"))
            .content("text/calendar", "BEGIN:VCALENDAR")
            .html("<p>hello</p>")
            .text("hello");

        let request = MailRequest::build(email, None).unwrap();
        let types: Vec<&str> = request.content.iter().map(|c| c.mime_type.as_str()).collect();
        assert_eq!(types, ["text/plain", "text/html", "text/calendar"]);
    }
}
