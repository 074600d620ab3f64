//! Credential handling: one header, picked once from the credential's prefix.

use std::collections::HashMap;
use std::fmt;

/// Prefix that marks a raw credential as a session cookie.
const SESSION_PREFIX: &str = "session=";

/// A ready-made credential supplied on the command line.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// `session=<value>`, sent verbatim as the `Cookie` header.
    SessionCookie(String),
    /// Anything else, sent verbatim as the `Authorization` header.
    Token(String),
}

impl Credential {
    /// Classify a raw credential by literal prefix match.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with(SESSION_PREFIX) {
            Credential::SessionCookie(raw.to_string())
        } else {
            Credential::Token(raw.to_string())
        }
    }

    /// Header name and value carrying this credential.
    pub fn header(&self) -> (&'static str, &str) {
        match self {
            Credential::SessionCookie(v) => ("Cookie", v),
            Credential::Token(v) => ("Authorization", v),
        }
    }
}

// Keeps secrets out of `{:?}` in logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::SessionCookie(_) => write!(f, "SessionCookie(<redacted>)"),
            Credential::Token(_) => write!(f, "Token(<redacted>)"),
        }
    }
}

/// Headers attached to every API request.
pub fn api_headers(credential: &Credential) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    let (name, value) = credential.header();
    headers.insert(name.to_string(), value.to_string());
    headers
}
