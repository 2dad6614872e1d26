//! Key/value metadata record.
//!
//! [`Metadata`] is the simplest record built on the hierarchy: a validated
//! key, an arbitrary value, and an embedded [`Hierarchy`] for anything else a
//! collaborator wants to attach.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    Result,
    constants::METADATA_KEY_MAX_LEN,
    hierarchy::{Hierarchical, Hierarchy, Value},
};

/// Errors raised when validating metadata records.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Metadata key cannot be empty")]
    EmptyKey,

    #[error("Metadata key is {len} characters long; the limit is {max}")]
    KeyTooLong { len: usize, max: usize },

    #[error("Metadata value cannot be empty after trimming")]
    EmptyValue,
}

impl From<MetadataError> for crate::Error {
    fn from(err: MetadataError) -> Self {
        crate::Error::Metadata(err)
    }
}

/// A named value with its own embedded hierarchy.
///
/// Keys are trimmed and must be between 1 and 255 characters afterwards.
/// Text values are trimmed too and must not end up empty. Unknown fields are
/// rejected when deserializing.
///
/// ```
/// use adh::metadata::Metadata;
///
/// let meta = Metadata::new("  revision  ", "B")?;
/// assert_eq!(meta.key(), "revision");
/// assert!(Metadata::new("   ", "B").is_err());
/// # Ok::<(), adh::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMetadata")]
pub struct Metadata {
    key: String,
    value: Value,
    #[serde(default)]
    adh: Hierarchy,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMetadata {
    key: String,
    value: Value,
    #[serde(default)]
    adh: Hierarchy,
}

impl TryFrom<RawMetadata> for Metadata {
    type Error = MetadataError;

    fn try_from(raw: RawMetadata) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            key: validate_key(&raw.key)?,
            value: validate_value(raw.value)?,
            adh: raw.adh,
        })
    }
}

impl Metadata {
    pub fn new(key: impl AsRef<str>, value: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            key: validate_key(key.as_ref())?,
            value: validate_value(value.into())?,
            adh: Hierarchy::new(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replaces the key, applying the same validation as [`Metadata::new`].
    pub fn set_key(&mut self, key: impl AsRef<str>) -> Result<()> {
        self.key = validate_key(key.as_ref())?;
        Ok(())
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replaces the value. Text is trimmed and must not be blank.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<()> {
        self.value = validate_value(value.into())?;
        Ok(())
    }
}

impl Hierarchical for Metadata {
    fn hierarchy(&self) -> &Hierarchy {
        &self.adh
    }

    fn hierarchy_mut(&mut self) -> &mut Hierarchy {
        &mut self.adh
    }
}

fn validate_key(key: &str) -> std::result::Result<String, MetadataError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(MetadataError::EmptyKey);
    }

    let len = key.chars().count();
    if len > METADATA_KEY_MAX_LEN {
        return Err(MetadataError::KeyTooLong {
            len,
            max: METADATA_KEY_MAX_LEN,
        });
    }

    Ok(key.to_string())
}

fn validate_value(value: Value) -> std::result::Result<Value, MetadataError> {
    match value {
        Value::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(MetadataError::EmptyValue);
            }
            Ok(Value::Text(trimmed.to_string()))
        }
        other => Ok(other),
    }
}
