//! Email address value object.
//!
//! Emails are the lookup key for friend-request targets, so they are
//! normalized once at the boundary: trimmed, lowercased, shape-checked.
//! Equality is by normalized value.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and normalize an email address.
    ///
    /// This is deliberately a shape check (`local@domain`, non-empty halves,
    /// no whitespace), not RFC 5322 validation.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_ascii_lowercase();

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(DomainError::validation("email must contain '@'"));
        };
        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::validation(
                "email must have a local part and a domain",
            ));
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("email must not contain whitespace"));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_surrounding_whitespace() {
        let email = EmailAddress::parse("  A@X.Com ").unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn equal_after_normalization() {
        assert_eq!(
            EmailAddress::parse("a@x.com").unwrap(),
            EmailAddress::parse("A@X.COM").unwrap()
        );
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(EmailAddress::parse("ax.com").is_err());
    }

    #[test]
    fn rejects_empty_local_or_domain() {
        assert!(EmailAddress::parse("@x.com").is_err());
        assert!(EmailAddress::parse("a@").is_err());
    }

    #[test]
    fn rejects_interior_whitespace() {
        assert!(EmailAddress::parse("a b@x.com").is_err());
    }

    #[test]
    fn deserializes_with_validation() {
        let ok: EmailAddress = serde_json::from_str("\"A@X.com\"").unwrap();
        assert_eq!(ok.as_str(), "a@x.com");
        assert!(serde_json::from_str::<EmailAddress>("\"nope\"").is_err());
    }
}
