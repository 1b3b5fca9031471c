//! Name policy: the configurable set of reserved and protected role names.
//!
//! The policy is a plain value. It is built once (from defaults or from
//! configuration), handed to [`NameValidator`](crate::domain::NameValidator),
//! and never mutated afterwards.
//!
//! | Field               | Can be created? | System role? |
//! |---------------------|-----------------|--------------|
//! | `reserved_names`    | no              | yes          |
//! | `reserved_prefixes` | no              | yes          |
//! | `protected_names`   | yes             | yes          |

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RoleName;

/// Default maximum length of a normalized role name.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Reserved and protected name rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamePolicy {
    max_length: usize,
    reserved_names: BTreeSet<String>,
    reserved_prefixes: Vec<String>,
    protected_names: BTreeSet<String>,
}

impl NamePolicy {
    /// A policy with nothing reserved and the given length limit.
    pub fn permissive(max_length: usize) -> Self {
        Self {
            max_length,
            reserved_names: BTreeSet::new(),
            reserved_prefixes: Vec::new(),
            protected_names: BTreeSet::new(),
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_reserved_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reserved_names = normalize_set(names);
        self
    }

    pub fn with_reserved_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reserved_prefixes = normalize_set(prefixes).into_iter().collect();
        self
    }

    pub fn with_protected_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.protected_names = normalize_set(names);
        self
    }

    /// Re-normalize every entry.
    ///
    /// Needed after deserialization, where entries arrive exactly as written
    /// in the config file (`"admin"`, `" sys_ "`).
    pub fn normalized(self) -> Self {
        Self {
            max_length: self.max_length,
            reserved_names: normalize_set(self.reserved_names),
            reserved_prefixes: normalize_set(self.reserved_prefixes).into_iter().collect(),
            protected_names: normalize_set(self.protected_names),
        }
    }

    pub const fn max_length(&self) -> usize {
        self.max_length
    }
    pub fn reserved_names(&self) -> &BTreeSet<String> {
        &self.reserved_names
    }
    pub fn reserved_prefixes(&self) -> &[String] {
        &self.reserved_prefixes
    }
    pub fn protected_names(&self) -> &BTreeSet<String> {
        &self.protected_names
    }

    /// Name may not be created.
    pub fn is_reserved(&self, normalized: &str) -> bool {
        self.reserved_names.contains(normalized)
            || self
                .reserved_prefixes
                .iter()
                .any(|prefix| normalized.starts_with(prefix.as_str()))
    }

    /// Name belongs to a system role (immutable once it exists).
    pub fn is_system(&self, normalized: &str) -> bool {
        self.is_reserved(normalized) || self.protected_names.contains(normalized)
    }
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self::permissive(DEFAULT_MAX_LENGTH)
            .with_reserved_names(["SYSTEM", "ROOT"])
            .with_reserved_prefixes(["SYSTEM_", "SYS_", "INTERNAL_"])
            .with_protected_names(["ADMIN"])
    }
}

/// Normalize, drop blanks (an empty prefix would reserve everything).
fn normalize_set<I, S>(entries: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| RoleName::normalize(entry.as_ref()))
        .filter(|entry| !entry.is_empty())
        .collect()
}
