//! Batch type.
//!
//! A batch is an ordered set of secrets provisioned in one run. It is read
//! wholesale from a JSON object (`{"NAME": "value"}`) or a dotenv file.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use tracing::debug;
use zeroize::Zeroizing;

use super::SecretEntry;
use crate::error::{BatchError, Result};

/// Supported batch file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    /// JSON object of name to string value
    Json,
    /// `NAME=value` lines
    Dotenv,
}

impl BatchFormat {
    /// Pick a format from the file name. Anything not recognisably dotenv is
    /// treated as JSON.
    pub fn detect(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let is_dotenv = file_name == ".env"
            || file_name.starts_with(".env.")
            || path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("env"));

        if is_dotenv {
            BatchFormat::Dotenv
        } else {
            BatchFormat::Json
        }
    }
}

/// An ordered collection of secrets with unique names.
#[derive(Debug, Default)]
pub struct Batch {
    entries: Vec<SecretEntry>,
}

impl Batch {
    /// Load a batch file, detecting the format from its name.
    ///
    /// # Errors
    ///
    /// Returns `BatchError` if the file cannot be read or parsed, a value is
    /// not a string, or two names collide.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = BatchFormat::detect(path);
        debug!(path = %path.display(), ?format, "loading batch");

        let batch = match format {
            BatchFormat::Json => {
                let contents = Zeroizing::new(std::fs::read_to_string(path).map_err(|source| {
                    BatchError::Read {
                        path: path.to_path_buf(),
                        source,
                    }
                })?);
                Self::from_json(&contents, path)?
            }
            BatchFormat::Dotenv => Self::from_dotenv(path)?,
        };

        debug!(entries = batch.len(), "batch loaded");
        Ok(batch)
    }

    /// Parse a JSON object mapping names to string values, keeping key order.
    ///
    /// `origin` only labels errors.
    ///
    /// # Errors
    ///
    /// Returns `BatchError` on malformed JSON, non-string values, empty or
    /// duplicate names.
    pub fn from_json(contents: &str, origin: impl AsRef<Path>) -> Result<Self> {
        let object: OrderedObject =
            serde_json::from_str(contents).map_err(|e| BatchError::Parse {
                path: origin.as_ref().to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut pairs = Vec::with_capacity(object.0.len());
        for (name, value) in object.0 {
            match value {
                serde_json::Value::String(s) => pairs.push((name, s)),
                _ => return Err(BatchError::NonStringValue(name).into()),
            }
        }

        Self::from_pairs(pairs)
    }

    /// Parse a dotenv file.
    ///
    /// Values are taken literally: `$NAME` is never expanded.
    ///
    /// # Errors
    ///
    /// Returns `BatchError` if the file cannot be read or parsed, or on empty
    /// or duplicate names.
    pub fn from_dotenv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = Zeroizing::new(std::fs::read_to_string(path).map_err(|source| {
            BatchError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?);
        Self::parse_dotenv(&contents, path)
    }

    /// Parse dotenv `contents`. `origin` only labels errors.
    ///
    /// Skips empty lines and comments. Single-quoted values are verbatim,
    /// double-quoted values understand `\n`, `\r`, `\"` and `\\`.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::Parse` for a line without `=` or an unterminated
    /// quote, and the `from_pairs` errors.
    pub fn parse_dotenv(contents: &str, origin: impl AsRef<Path>) -> Result<Self> {
        let origin = origin.as_ref();
        let mut pairs = Vec::new();

        for (number, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);
            let (name, raw) = line.split_once('=').ok_or_else(|| BatchError::Parse {
                path: origin.to_path_buf(),
                reason: format!("line {}: expected NAME=value", number + 1),
            })?;

            let name = name.trim();
            let value = parse_dotenv_value(raw.trim()).ok_or_else(|| BatchError::Parse {
                path: origin.to_path_buf(),
                reason: format!("line {}: unterminated quote in value for '{}'", number + 1, name),
            })?;
            pairs.push((name.to_string(), value));
        }

        Self::from_pairs(pairs)
    }

    /// Build a batch from name/value pairs in the given order.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::EmptyName` or `BatchError::DuplicateName`.
    pub fn from_pairs<I, N, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Vec<u8>>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (name, value) in pairs {
            let name = name.into();
            if name.is_empty() {
                return Err(BatchError::EmptyName.into());
            }
            // GitHub stores names uppercased, so API_KEY and api_key collide
            if !seen.insert(name.to_ascii_uppercase()) {
                return Err(BatchError::DuplicateName(name).into());
            }
            entries.push(SecretEntry::new(name, value));
        }

        Ok(Self { entries })
    }

    /// Secret names in batch order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Batch {
    type Item = SecretEntry;
    type IntoIter = std::vec::IntoIter<SecretEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Unquote a dotenv value. `None` if a quote is opened but never closed.
fn parse_dotenv_value(raw: &str) -> Option<String> {
    for quote in ['"', '\''] {
        if let Some(rest) = raw.strip_prefix(quote) {
            let inner = rest.strip_suffix(quote)?;
            return Some(if quote == '"' {
                unescape_double_quoted(inner)
            } else {
                inner.to_string()
            });
        }
    }

    Some(raw.to_string())
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// JSON object deserialized as a list of pairs so that source order and
/// duplicate keys are both visible.
struct OrderedObject(Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for OrderedObject {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ObjectVisitor;

        impl<'de> Visitor<'de> for ObjectVisitor {
            type Value = OrderedObject;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object mapping secret names to values")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push((key, value));
                }
                Ok(OrderedObject(entries))
            }
        }

        deserializer.deserialize_map(ObjectVisitor)
    }
}
