//! Common error infrastructure for kart-core.
//!
//! Each concern defines its own `thiserror` enum next to the code that raises
//! it. This module holds the pieces they share: a severity classification and
//! the [`KartError`] trait implemented by every error enum in the crate.
//!
//! `EmptyResult` is deliberately absent: a search or equivalence query with no
//! matches returns an empty `Vec`, never an error.

/// Severity level of an error, used for categorization and reporting.
///
/// - **Validation**: invalid input, reject without retry
/// - **Internal**: an invariant the caller should have upheld was broken
/// - **Fatal**: required data is unavailable; nothing can be computed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, such as a malformed table or an out-of-range preset.
    Validation,

    /// Logic-invariant violation.
    ///
    /// Examples: a selector offered a name that is not in its table, or a
    /// selected pair is missing from its own equivalence set.
    Internal,

    /// Unrecoverable for the current session.
    ///
    /// Examples: a catalog file is missing or unreadable.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all kart errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who is at fault, not by impact
pub trait KartError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for logging and testing. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_names() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
        assert!(!ErrorSeverity::Fatal.is_internal());
    }
}
