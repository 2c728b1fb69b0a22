//! Bounded recipient lists.

use serde::Serialize;

use super::Address;
use crate::error::{Error, Result};

/// Largest number of addresses accepted in one recipient field.
pub const MAX_RECIPIENTS: usize = 1000;

/// Non-empty list of at most [`MAX_RECIPIENTS`] addresses.
///
/// Used for each of `to`, `cc` and `bcc` independently. A single address
/// converts infallibly via [`From<Address>`]; lists go through
/// [`Recipients::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Recipients(Vec<Address>);

impl Recipients {
    /// Creates a recipient list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecipientListOutOfBounds`] if the list is empty or
    /// longer than [`MAX_RECIPIENTS`].
    pub fn new(addresses: impl IntoIterator<Item = Address>) -> Result<Self> {
        let addresses: Vec<Address> = addresses.into_iter().collect();
        if addresses.is_empty() || addresses.len() > MAX_RECIPIENTS {
            return Err(Error::RecipientListOutOfBounds {
                count: addresses.len(),
                max: MAX_RECIPIENTS,
            });
        }
        Ok(Self(addresses))
    }

    /// Parses a list of raw email strings.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidAddress`], or a bounds error.
    pub fn parse<I, S>(emails: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let addresses = emails
            .into_iter()
            .map(Address::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(addresses)
    }

    /// Number of addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list has no addresses, which a constructed list never does.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the addresses in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.0.iter()
    }

    /// Returns the addresses as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Address] {
        &self.0
    }
}

impl From<Address> for Recipients {
    fn from(address: Address) -> Self {
        Self(vec![address])
    }
}

impl TryFrom<Vec<Address>> for Recipients {
    type Error = Error;

    fn try_from(addresses: Vec<Address>) -> Result<Self> {
        Self::new(addresses)
    }
}

impl<'a> IntoIterator for &'a Recipients {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn addresses(count: usize) -> Vec<Address> {
        (0..count)
            .map(|i| Address::new(format!("user{i}@example.com")).unwrap())
            .collect()
    }

    #[test]
    fn test_single_address() {
        let list = Recipients::from(Address::new("a@x.com").unwrap());
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].email(), "a@x.com");
    }

    #[test]
    fn test_empty_is_rejected() {
        let err = Recipients::new(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::RecipientListOutOfBounds { count: 0, max: 1000 }
        ));
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(Recipients::new(addresses(1000)).unwrap().len(), 1000);

        let err = Recipients::try_from(addresses(1001)).unwrap_err();
        assert!(matches!(
            err,
            Error::RecipientListOutOfBounds { count: 1001, .. }
        ));
    }

    #[test]
    fn test_order_preserved() {
        let list = Recipients::new(addresses(3)).unwrap();
        let emails: Vec<&str> = list.iter().map(Address::email).collect();
        assert_eq!(
            emails,
            ["user0@example.com", "user1@example.com", "user2@example.com"]
        );
    }

    #[test]
    fn test_parse_rejects_invalid_member() {
        let err = Recipients::parse(["a@x.com", "broken"]).unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(ref s) if s == "broken"));
    }

    #[test]
    fn test_serializes_as_array() {
        let list = Recipients::parse(["a@x.com", "b@x.com"]).unwrap();
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            serde_json::json!([{ "email": "a@x.com" }, { "email": "b@x.com" }])
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_bounds(count in 0usize..=1100) {
            let result = Recipients::new(addresses(count));
            prop_assert_eq!(result.is_ok(), (1..=MAX_RECIPIENTS).contains(&count));
        }
    }
}
