use crate::domain::{error::ValidationError, policy::NamePolicy, value_objects::RoleName};

/// Centralized name validation.
///
/// All naming rules live here, not scattered across the service. The
/// validator is pure: no I/O, no clock, no shared state, so it is safe to call
/// repeatedly and from any thread.
#[derive(Debug, Clone, Default)]
pub struct NameValidator {
    policy: NamePolicy,
}

impl NameValidator {
    pub fn new(policy: NamePolicy) -> Self {
        Self {
            policy: policy.normalized(),
        }
    }

    pub fn policy(&self) -> &NamePolicy {
        &self.policy
    }

    /// Turn a raw name into a name that may be created or renamed to.
    ///
    /// Checks run in order: blank, too long, reserved.
    pub fn normalize_and_validate(&self, raw: &str) -> Result<RoleName, ValidationError> {
        let normalized = RoleName::normalize(raw);
        if normalized.is_empty() {
            return Err(ValidationError::Blank);
        }

        let length = normalized.chars().count();
        if length > self.policy.max_length() {
            return Err(ValidationError::TooLong {
                length,
                max: self.policy.max_length(),
            });
        }

        if self.policy.is_reserved(&normalized) {
            return Err(ValidationError::ReservedName { name: normalized });
        }

        Ok(RoleName::from_normalized(normalized))
    }

    /// Normalize a name for lookups. Reserved names are allowed here.
    pub fn normalize_for_lookup(&self, raw: &str) -> Result<RoleName, ValidationError> {
        RoleName::from_stored(raw)
    }

    /// Trim a search pattern and collapse inner whitespace runs, as stored
    /// names are. Case is left alone; matching ignores it.
    pub fn validate_pattern(&self, raw: &str) -> Result<String, ValidationError> {
        let pattern = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if pattern.is_empty() {
            return Err(ValidationError::BlankPattern);
        }
        Ok(pattern)
    }

    /// Whether `name` belongs to a system role. Evaluated fresh on each call.
    pub fn is_system(&self, name: &RoleName) -> bool {
        self.policy.is_system(name.as_str())
    }
}
