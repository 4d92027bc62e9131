//! Input validation for secret-hub operations.
//!
//! Validates secret names and repository references before anything is sent
//! to GitHub.

use crate::core::constants::RESERVED_PREFIX;
use crate::error::{Result, ValidationError};

/// Validate a secret name.
///
/// GitHub secret names must follow these rules:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot start with the `GITHUB_` prefix (any case)
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_secret_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if let Some(first_char) = name.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(invalid_name(name, "cannot start with a digit".to_string()));
        }
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid_name(
                name,
                format!(
                    "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            ));
        }
    }

    if name.to_ascii_uppercase().starts_with(RESERVED_PREFIX) {
        return Err(invalid_name(
            name,
            format!("the {} prefix is reserved", RESERVED_PREFIX),
        ));
    }

    Ok(())
}

/// Validate one part (owner or name) of a repository reference.
///
/// # Errors
///
/// Returns `ValidationError::InvalidRepository` if the part is empty or
/// contains characters GitHub does not allow.
pub fn validate_repo_part(input: &str, part: &str, label: &str) -> Result<()> {
    if part.is_empty() {
        return Err(ValidationError::InvalidRepository {
            input: input.to_string(),
            reason: format!("{} cannot be empty", label),
        }
        .into());
    }

    if part == "." || part == ".." {
        return Err(ValidationError::InvalidRepository {
            input: input.to_string(),
            reason: format!("{} cannot be '{}'", label, part),
        }
        .into());
    }

    if let Some(ch) = part
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.'))
    {
        return Err(ValidationError::InvalidRepository {
            input: input.to_string(),
            reason: format!("invalid character '{}' in {}", ch, label),
        }
        .into());
    }

    Ok(())
}

fn invalid_name(name: &str, reason: String) -> crate::error::Error {
    ValidationError::InvalidName {
        name: name.to_string(),
        reason,
    }
    .into()
}
