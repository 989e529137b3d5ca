#![forbid(unsafe_code)]

//! Menu item identity.
//!
//! [`ItemKey`] is the single identifier currency shared by the registry,
//! the active-key state machine, and keyboard navigation. The overflow
//! ("rest") trigger participates in all three as if it were an ordinary
//! item, so it is modeled as a distinguished variant rather than a reserved
//! string value — a caller-supplied key can never collide with it.
//!
//! # Invariants
//! 1. `User` keys are unique within one menu. Uniqueness is a caller
//!    responsibility; violations are a development-build assertion in the
//!    registry, not a recoverable runtime error.
//! 2. `Rest` never equals any `User` key, by construction.

use std::fmt;

/// Identifier for one top-level menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKey {
    /// A caller-supplied key for a declared item.
    User(String),
    /// The synthetic key of the overflow ("rest") trigger.
    Rest,
}

impl ItemKey {
    /// Create a caller key.
    #[must_use]
    pub fn user(key: impl Into<String>) -> Self {
        Self::User(key.into())
    }

    /// True for the overflow trigger's sentinel key.
    #[inline]
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::Rest)
    }

    /// The caller key, or `None` for the sentinel.
    #[must_use]
    pub fn as_user(&self) -> Option<&str> {
        match self {
            Self::User(key) => Some(key),
            Self::Rest => None,
        }
    }
}

impl From<&str> for ItemKey {
    fn from(key: &str) -> Self {
        Self::User(key.to_owned())
    }
}

impl From<String> for ItemKey {
    fn from(key: String) -> Self {
        Self::User(key)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(key) => f.write_str(key),
            Self::Rest => f.write_str("<rest>"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
