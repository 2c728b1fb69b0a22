//! Email address with optional display name.

use serde::Serialize;

use crate::error::{Error, Result};

/// Email address as sent to the API.
///
/// Validation is deliberately permissive: the only requirement is that the
/// email contains an `@`. Anything else is left for the provider to judge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Address {
    /// Creates an address without a display name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if `email` has no `@`.
    pub fn new(email: impl Into<String>) -> Result<Self> {
        let email = email.into();
        Self::validate(&email)?;
        Ok(Self { email, name: None })
    }

    /// Creates an address with a display name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if `email` has no `@`.
    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let mut address = Self::new(email)?;
        address.name = Some(name.into());
        Ok(address)
    }

    /// Returns the email part.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn validate(email: &str) -> Result<()> {
        if email.contains('@') {
            Ok(())
        } else {
            Err(Error::InvalidAddress(email.to_string()))
        }
    }
}

impl TryFrom<&str> for Address {
    type Error = Error;

    fn try_from(email: &str) -> Result<Self> {
        Self::new(email)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} <{}>", self.email),
            None => write!(f, "{}", self.email),
        }
    }
}
