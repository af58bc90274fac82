//! Parameter type.
//!
//! A decoded, immutable parameter fetched from the store.

use std::fmt;

use zeroize::Zeroizing;

use crate::core::constants::{PATH_SEPARATOR, SECURE_STRING};
use crate::core::types::EnvKey;
use crate::error::ParameterError;

/// Parameter exactly as the store returned it.
///
/// Every field is optional so that decoding, not the transport, decides
/// what a malformed entry is.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawParameter {
    pub name: Option<String>,
    pub value: Option<String>,
    pub kind: Option<String>,
}

impl RawParameter {
    /// Shorthand for a well-formed entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            kind: Some(kind.into()),
        }
    }
}

impl fmt::Debug for RawParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = self.kind.as_deref() == Some(SECURE_STRING);
        f.debug_struct("RawParameter")
            .field("name", &self.name)
            .field(
                "value",
                &self.value.as_ref().map(|v| redacted(v, secret)),
            )
            .field("kind", &self.kind)
            .finish()
    }
}

/// Parameter type as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    StringList,
    SecureString,
    Other(String),
}

impl ParameterKind {
    fn parse(kind: &str) -> Self {
        match kind {
            "String" => Self::String,
            "StringList" => Self::StringList,
            SECURE_STRING => Self::SecureString,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A fetched parameter with a guaranteed non-empty environment key.
#[derive(Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    key: EnvKey,
    value: Zeroizing<String>,
    kind: ParameterKind,
}

impl Parameter {
    /// Decode a raw store entry.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` when the name, value or type is missing, or when
    /// the name has no leaf segment to use as an environment key.
    pub fn decode(raw: RawParameter) -> Result<Self, ParameterError> {
        let name = raw.name.ok_or(ParameterError::MissingField("name"))?;
        let value = raw.value.ok_or(ParameterError::MissingField("value"))?;
        let kind = raw
            .kind
            .as_deref()
            .map(ParameterKind::parse)
            .ok_or(ParameterError::MissingField("type"))?;

        let key = leaf(&name)
            .ok_or_else(|| ParameterError::EmptyKey(name.clone()))?
            .to_string();

        Ok(Self {
            name,
            key,
            value: Zeroizing::new(value),
            kind,
        })
    }

    /// Fully qualified name in the store
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Environment variable name (last path segment)
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Plaintext value
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> &ParameterKind {
        &self.kind
    }

    /// Whether the value was decrypted from a SecureString.
    pub fn is_secret(&self) -> bool {
        self.kind == ParameterKind::SecureString
    }

    /// Value length in characters, safe to log for secrets.
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("value", &redacted(&self.value, self.is_secret()))
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn leaf(name: &str) -> Option<&str> {
    name.rsplit(PATH_SEPARATOR)
        .next()
        .filter(|segment| !segment.is_empty())
}

fn redacted(value: &str, secret: bool) -> String {
    if secret {
        format!("<{} chars>", value.chars().count())
    } else {
        value.to_string()
    }
}
