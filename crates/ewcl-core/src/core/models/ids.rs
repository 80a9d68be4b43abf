use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Key of a deposited structure (e.g. `1XQ8`), compared case-insensitively.
///
/// The identifier is normalized to uppercase on construction, so derived
/// equality and hashing are already case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StructureId(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Structure identifier must be non-empty and alphanumeric (got '{0}')")]
pub struct ParseStructureIdError(pub String);

impl StructureId {
    pub fn new(id: &str) -> Result<Self, ParseStructureIdError> {
        let trimmed = id.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ParseStructureIdError(id.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// For identifiers compiled into the crate, which are known to be valid.
    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form, as used in reference data file names.
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl FromStr for StructureId {
    type Err = ParseStructureIdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for StructureId {
    type Error = ParseStructureIdError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<StructureId> for String {
    fn from(id: StructureId) -> Self {
        id.0
    }
}

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
