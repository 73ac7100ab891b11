//! Error types for port operations.

/// The kind of rule record a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Race,
    Class,
    Background,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Race => "race",
            Self::Class => "class",
            Self::Background => "background",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule data lookup errors with context for debugging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleDataError {
    /// No record with this ID exists in the source.
    #[error("{kind} not found: {id}")]
    NotFound { kind: RuleKind, id: String },

    /// The source could not be reached or read.
    #[error("Rule data source unavailable: {0}")]
    Unavailable(String),

    /// The source returned data that could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RuleDataError {
    /// Create a NotFound error with record kind and ID context.
    pub fn not_found(kind: RuleKind, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Create an Unavailable error.
    pub fn unavailable(message: impl ToString) -> Self {
        Self::Unavailable(message.to_string())
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_context() {
        let err = RuleDataError::not_found(RuleKind::Race, "lizardfolk");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "race not found: lizardfolk");
    }

    #[test]
    fn unavailable_is_not_not_found() {
        let err = RuleDataError::unavailable("connection refused");
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("connection refused"));
    }
}
