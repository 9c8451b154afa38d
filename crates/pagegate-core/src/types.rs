//! Strong identifier types for the page gate.
//!
//! Identifiers are newtypes or closed enums to prevent misuse at compile
//! time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A positive page identifier from the host catalog.
///
/// Zero is never a valid page id; construction enforces this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageId(u32);

impl PageId {
    /// Create from a raw id. Returns `None` for zero.
    pub const fn new(id: u32) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id))
        }
    }

    /// Get the raw id.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Coerce an untrusted JSON value into a page id.
    ///
    /// Positive integers pass, numeric strings are parsed; zero, negative,
    /// fractional, and non-numeric values are dropped (`None`).
    pub fn coerce(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .and_then(Self::new),
            serde_json::Value::String(s) => s.trim().parse::<u32>().ok().and_then(Self::new),
            _ => None,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three fixed password-group slots.
///
/// The count is a hardcoded system limit, not configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupId {
    One,
    Two,
    Three,
}

impl GroupId {
    /// All slots, in precedence order. Earlier slots win ties.
    pub const ALL: [GroupId; 3] = [GroupId::One, GroupId::Two, GroupId::Three];

    /// Number of group slots.
    pub const COUNT: usize = 3;

    /// Stable string key used in settings blobs and admin payloads.
    pub const fn key(&self) -> &'static str {
        match self {
            GroupId::One => "group1",
            GroupId::Two => "group2",
            GroupId::Three => "group3",
        }
    }

    /// Parse a settings key. Unknown keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "group1" => Some(GroupId::One),
            "group2" => Some(GroupId::Two),
            "group3" => Some(GroupId::Three),
            _ => None,
        }
    }

    /// Zero-based slot index.
    pub const fn index(&self) -> usize {
        match self {
            GroupId::One => 0,
            GroupId::Two => 1,
            GroupId::Three => 2,
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
