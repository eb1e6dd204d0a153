//! Generated Swift fragments
//!
//! Fixed templates with the two credential values substituted verbatim.
//! Validation in [`crate::credentials`] guarantees the values are safe to
//! embed as string literals; no escaping happens here.

use crate::credentials::Credentials;
use crate::SDK_MODULE;

/// The vendor import statement
pub fn import_line() -> String {
    format!("import {}", SDK_MODULE)
}

/// Initialization branch inserted inside an existing function or constructor.
///
/// The success branch carries a commented placeholder for the optional
/// echo-code registration; the failure branch is left for the app to fill in.
pub fn branch_snippet(credentials: &Credentials) -> String {
    format!(
        r#"        if Plengi.initialize(clientID: "{id}", clientSecret: "{secret}") == .SUCCESS {{
            // TODO: register an echo code if per-user identification is needed
            //  Plengi.setEchoCode(echoCode: "customer-defined user identifier")
        }} else {{
            // initialization failed
        }}"#,
        id = credentials.client_id(),
        secret = credentials.client_secret(),
    )
}

/// The branch snippet wrapped in a full `init()` block, for `@main` root
/// types that have no constructor yet.
pub fn constructor_snippet(credentials: &Credentials) -> String {
    format!(
        "    init() {{\n{body}\n    }}",
        body = branch_snippet(credentials),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("abc123", "s3cret").unwrap()
    }

    #[test]
    fn test_import_line() {
        assert_eq!(import_line(), "import Plengi");
    }

    #[test]
    fn test_branch_snippet_embeds_credentials_verbatim() {
        let snippet = branch_snippet(&creds());
        assert!(snippet.contains(r#"Plengi.initialize(clientID: "abc123", clientSecret: "s3cret")"#));
        assert!(snippet.contains("== .SUCCESS"));
    }

    #[test]
    fn test_constructor_snippet_wraps_branch() {
        let snippet = constructor_snippet(&creds());
        assert!(snippet.contains("init() {"));
        assert!(snippet.contains("Plengi.initialize"));
        assert!(snippet.trim_end().ends_with('}'));
    }
}
