//! Body parts and the order the API expects them in.

use std::collections::BTreeMap;

use serde::Serialize;

/// MIME type of the plain text part.
pub const TEXT_PLAIN: &str = "text/plain";

/// MIME type of the HTML part.
pub const TEXT_HTML: &str = "text/html";

/// A single body part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    /// MIME type (e.g. `text/plain`).
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Body for this MIME type.
    pub value: String,
}

impl Content {
    /// Creates a body part.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            value: value.into(),
        }
    }
}

/// Orders body parts for the API.
///
/// `text/plain` comes first and `text/html` second when present; all other
/// types follow in the map's iteration order. The provider rejects requests
/// whose plain or HTML parts are not at the front.
#[must_use]
pub fn assemble(mut parts: BTreeMap<String, String>) -> Vec<Content> {
    let mut ordered = Vec::with_capacity(parts.len());

    for leading in [TEXT_PLAIN, TEXT_HTML] {
        if let Some(value) = parts.remove(leading) {
            ordered.push(Content::new(leading, value));
        }
    }

    ordered.extend(
        parts
            .into_iter()
            .map(|(mime_type, value)| Content { mime_type, value }),
    );
    ordered
}
