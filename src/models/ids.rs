//! Strongly-typed expense identifier
//!
//! Expense ids are random UUIDs assigned by the store when an expense is
//! added. The short display form (`exp-` plus the first 8 hex digits) is what
//! listings show and what the CLI accepts as a prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Identity of a single expense, immutable once assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse a full ID, with or without the display prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        s.parse()
    }

    /// Whether `needle` identifies this expense, either as the full UUID or
    /// as a prefix of its hex form (display prefix optional)
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim();
        let needle = needle.strip_prefix(DISPLAY_PREFIX).unwrap_or(needle);
        if needle.is_empty() {
            return false;
        }
        self.0.to_string().starts_with(&needle.to_ascii_lowercase())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
