//! Credential type.
//!
//! Wraps the GitHub token so it cannot end up in logs by accident.

use std::fmt;

use zeroize::Zeroizing;

/// A bearer token. Redacted in `Debug` and `Display`, wiped on drop.
#[derive(Clone)]
pub struct Credential(Zeroizing<String>);

impl Credential {
    /// Wrap a token. Surrounding whitespace is stripped.
    pub fn new(token: impl Into<String>) -> Self {
        let raw = Zeroizing::new(token.into());
        Self(Zeroizing::new(raw.trim().to_string()))
    }

    /// Raw token, for building the `Authorization` header only.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the token is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
