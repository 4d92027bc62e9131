//! Repository reference type.

use std::fmt;
use std::str::FromStr;

use crate::core::validation::validate_repo_part;
use crate::error::{Error, Result, ValidationError};

/// A GitHub repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    owner: String,
    name: String,
}

impl RepositoryRef {
    /// Create a repository reference from its parts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRepository` if either part is empty or
    /// contains characters GitHub does not allow.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        let name = name.into();
        let input = format!("{}/{}", owner, name);
        validate_repo_part(&input, &owner, "owner")?;
        validate_repo_part(&input, &name, "repository")?;
        Ok(Self { owner, name })
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepositoryRef {
    type Err = Error;

    /// Parse `owner/repo`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (owner, name) = s.split_once('/').ok_or_else(|| ValidationError::InvalidRepository {
            input: s.to_string(),
            reason: "expected the form owner/repo".to_string(),
        })?;

        if name.contains('/') {
            return Err(ValidationError::InvalidRepository {
                input: s.to_string(),
                reason: "expected the form owner/repo".to_string(),
            }
            .into());
        }

        Self::new(owner, name)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
