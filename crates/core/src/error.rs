//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, lookups). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more required fields were absent or empty.
    #[error("missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A uniqueness constraint was violated (e.g. duplicate email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn missing(fields: Vec<&'static str>) -> Self {
        Self::MissingFields(fields)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

/// Collect the names of required fields that are absent or empty.
///
/// Returns `Ok(())` when every field carries a non-empty value.
pub fn require_fields(fields: &[(&'static str, Option<&str>)]) -> DomainResult<()> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(str::is_empty))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::missing(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_fields_flags_absent_and_empty_values() {
        let err = require_fields(&[("email", Some("")), ("password", None), ("role", Some("admin"))])
            .unwrap_err();
        assert_eq!(err, DomainError::MissingFields(vec!["email", "password"]));
        assert_eq!(err.to_string(), "missing fields: email, password");
    }

    #[test]
    fn require_fields_accepts_complete_input() {
        assert!(require_fields(&[("title", Some("Launch")), ("image", Some("/i.png"))]).is_ok());
    }
}
