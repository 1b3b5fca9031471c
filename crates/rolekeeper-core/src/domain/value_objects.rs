//! Domain value objects: RoleId, RoleName.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity of their
//! own. Both are only constructible through checked paths, so holding one is
//! proof that its invariant holds:
//!
//! - `RoleId` is always positive.
//! - `RoleName` is always normalized and non-empty.
//!
//! Policy checks (length limits, reserved names) are NOT done here; they live
//! in `validation.rs` because the policy is configurable.

use crate::domain::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── RoleId ───────────────────────────────────────────────────────────────────

/// Identifier assigned by the repository on first save.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct RoleId(i64);

impl RoleId {
    /// Checked constructor; ids are positive.
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::NonPositiveId { id: raw });
        }
        Ok(Self(raw))
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for RoleId {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<RoleId> for i64 {
    fn from(id: RoleId) -> Self {
        id.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── RoleName ─────────────────────────────────────────────────────────────────

/// A normalized role name: trimmed, whitespace-collapsed, upper-cased.
///
/// This is the uniqueness key. Two raw inputs that differ only in case or
/// whitespace padding normalize to the same `RoleName`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName(String);

impl RoleName {
    /// Canonical form of a raw name. Total and idempotent.
    pub fn normalize(raw: &str) -> String {
        raw.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase()
    }

    /// Rebuild a name read back from storage.
    ///
    /// Only the blank rule is enforced; stores may hold system roles that
    /// were seeded outside the lifecycle service.
    pub fn from_stored(raw: &str) -> Result<Self, ValidationError> {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return Err(ValidationError::Blank);
        }
        Ok(Self(normalized))
    }

    /// Caller guarantees `normalized` came out of [`RoleName::normalize`]
    /// and is non-empty.
    pub(crate) fn from_normalized(normalized: String) -> Self {
        debug_assert!(!normalized.is_empty());
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoleName {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::from_stored(&raw)
    }
}

impl From<RoleName> for String {
    fn from(name: RoleName) -> Self {
        name.0
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
