//! Entity identifiers.
//!
//! The upstream sheet hands out ids as integers, hand-authored catalogs tend
//! to use strings. `EntityId` accepts both on the wire and stores the textual
//! form, so equality is always string equality. `as_number()` recovers the
//! integer for ordering where the catalog is numeric.
//!
//! Spreadsheet exports often write integer cells as floats; a whole-valued
//! float id (`1.0`) is stored as `"1"`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stable, unique entity identifier.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(from = "RawEntityId")]
pub struct EntityId(String);

/// Wire forms accepted for an id.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntityId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<RawEntityId> for EntityId {
    fn from(raw: RawEntityId) -> Self {
        match raw {
            RawEntityId::Int(n) => Self(n.to_string()),
            RawEntityId::Float(x) if x.fract() == 0.0 && x.abs() < i64::MAX as f64 => {
                Self((x as i64).to_string())
            }
            RawEntityId::Float(x) => Self(x.to_string()),
            RawEntityId::Text(s) => Self(s),
        }
    }
}

impl EntityId {
    /// Wrap any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as an integer, if the id is numeric.
    pub fn as_number(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}
