//! Credential validation
//!
//! The client ID and secret are embedded verbatim as Swift string literals
//! in the generated snippet, so validation rejects anything the literal
//! syntax cannot carry instead of trying to escape it.

use crate::error::{InjectError, Result};

/// Loplat client credentials supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Validate and construct credentials.
    ///
    /// Both values are trimmed; empty input and characters that would break
    /// the generated string literal (`"`, `\`, newlines) are rejected.
    pub fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        let client_id = Self::validated("client ID", client_id)?;
        let client_secret = Self::validated("client secret", client_secret)?;

        Ok(Self {
            client_id,
            client_secret,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    fn validated(field: &'static str, value: &str) -> Result<String> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(InjectError::EmptyCredential { field });
        }

        if trimmed.contains('"') {
            return Err(InjectError::UnsafeCredential {
                field,
                reason: "double quote",
            });
        }

        if trimmed.contains('\\') {
            return Err(InjectError::UnsafeCredential {
                field,
                reason: "backslash",
            });
        }

        if trimmed.contains('\n') || trimmed.contains('\r') {
            return Err(InjectError::UnsafeCredential {
                field,
                reason: "line break",
            });
        }

        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials_are_trimmed() {
        let creds = Credentials::new("  abc123  ", "s3cret").unwrap();
        assert_eq!(creds.client_id(), "abc123");
        assert_eq!(creds.client_secret(), "s3cret");
    }

    #[test]
    fn test_empty_client_id_rejected() {
        let err = Credentials::new("   ", "pw").unwrap_err();
        assert!(matches!(
            err,
            InjectError::EmptyCredential { field: "client ID" }
        ));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(Credentials::new("id", "").is_err());
    }

    #[test]
    fn test_quote_in_secret_rejected() {
        let err = Credentials::new("id", "pw\"]; drop").unwrap_err();
        assert!(matches!(err, InjectError::UnsafeCredential { .. }));
    }

    #[test]
    fn test_backslash_and_newline_rejected() {
        assert!(Credentials::new("a\\b", "pw").is_err());
        assert!(Credentials::new("id", "p\nw").is_err());
    }
}
