//! Domain types for the roster service.
//!
//! An [`Entry`] is one `(name, expiration, ip)` record. Entries have no
//! identifier other than their position in the ordered collection, so the
//! durable file and the cache mirror must agree on ordering at all times.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// One record of the collection: a named host with an expiration date.
///
/// The `expiration` field is a fixed-width ISO date (`YYYY-MM-DD`), which
/// makes lexicographic comparison equivalent to chronological comparison.
/// Fields must not contain spaces or newlines; the line codec separates
/// fields with single spaces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry name (non-empty, no embedded whitespace).
    pub name: String,
    /// Expiration date, ISO format `YYYY-MM-DD`.
    pub expiration: String,
    /// IP address, stored verbatim.
    pub ip: String,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(
        name: impl Into<String>,
        expiration: impl Into<String>,
        ip: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expiration: expiration.into(),
            ip: ip.into(),
        }
    }

    /// Validates that all fields are present and codec-safe.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("expiration", &self.expiration),
            ("ip", &self.ip),
        ] {
            if value.trim().is_empty() {
                return Err(RosterError::ValidationError(format!(
                    "{field} must not be empty"
                )));
            }
            if value.contains(char::is_whitespace) {
                return Err(RosterError::ValidationError(format!(
                    "{field} must not contain whitespace"
                )));
            }
        }
        Ok(())
    }

    /// Human-readable description used in notification texts:
    /// `name, expiration, ip`.
    pub fn describe(&self) -> String {
        format!("{}, {}, {}", self.name, self.expiration, self.ip)
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Opaque token identifying the durable store's current content state.
///
/// Returned by every read and required for conditional writes; the store
/// rejects a write whose token no longer matches the committed state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionToken(String);

impl VersionToken {
    /// Wraps a provider-issued token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value, as the provider issued it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The durable file's current content together with its version token.
#[derive(Clone, Debug)]
pub struct RemoteDocument {
    /// Full text content of the file.
    pub content: String,
    /// Version token for conditional replacement.
    pub version: VersionToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_validate_ok() {
        assert!(Entry::new("alpha", "2099-01-01", "10.0.0.1").validate().is_ok());
    }

    #[test]
    fn test_entry_validate_empty_field() {
        let err = Entry::new("", "2099-01-01", "10.0.0.1").validate().unwrap_err();
        assert!(matches!(err, RosterError::ValidationError(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_entry_validate_whitespace() {
        let err = Entry::new("two words", "2099-01-01", "10.0.0.1")
            .validate()
            .unwrap_err();
        assert!(matches!(err, RosterError::ValidationError(_)));
    }

    #[test]
    fn test_entry_describe() {
        let entry = Entry::new("alpha", "2025-06-01", "10.0.0.1");
        assert_eq!(entry.describe(), "alpha, 2025-06-01, 10.0.0.1");
    }

    #[test]
    fn test_entry_serde_shape() {
        let entry = Entry::new("alpha", "2025-06-01", "10.0.0.1");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "alpha",
                "expiration": "2025-06-01",
                "ip": "10.0.0.1"
            })
        );
    }

    #[test]
    fn test_version_token_roundtrip() {
        let token = VersionToken::new("95b966ae1c166bd92f8ae7d1c313e738c731dfc3");
        assert_eq!(token.as_str(), "95b966ae1c166bd92f8ae7d1c313e738c731dfc3");
        assert_eq!(token, VersionToken::new(token.as_str()));
    }
}
