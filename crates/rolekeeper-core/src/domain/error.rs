// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Rejection reasons produced by the pure domain layer.
///
/// All errors are:
/// - Cloneable (the service converts them without consuming state)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ========================================================================
    // Name rules
    // ========================================================================
    #[error("role name cannot be blank")]
    Blank,

    #[error("role name is {length} characters long, the maximum is {max}")]
    TooLong { length: usize, max: usize },

    #[error("role name '{name}' is reserved")]
    ReservedName { name: String },

    // ========================================================================
    // Query / identifier rules
    // ========================================================================
    #[error("search pattern cannot be blank")]
    BlankPattern,

    #[error("role id must be positive, got {id}")]
    NonPositiveId { id: i64 },
}

impl ValidationError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Blank => vec![
                "Provide a role name with at least one visible character".into(),
                "Example: rolekeeper create analyst".into(),
            ],
            Self::TooLong { max, .. } => vec![
                format!("Shorten the name to at most {max} characters"),
                "Whitespace runs are collapsed before the length is checked".into(),
            ],
            Self::ReservedName { name } => vec![
                format!("'{name}' matches a reserved name or prefix"),
                "Reserved names and prefixes are set by the name policy".into(),
                "Try: rolekeeper config get policy.reserved_prefixes".into(),
            ],
            Self::BlankPattern => vec!["Provide a non-empty search pattern".into()],
            Self::NonPositiveId { .. } => vec![
                "Role ids are positive integers assigned on creation".into(),
                "Try: rolekeeper list to see existing ids".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Forbidden,
    Internal,
}
