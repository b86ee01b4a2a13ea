//! Error types for declaration handling

use fen_loc::SourceLoc;

/// Errors returned by the declare operations
///
/// These are recoverable: the driving traversal translates them into
/// positioned diagnostics and continues analysis. Unbalanced scope
/// pops, by contrast, are a defect in the traversal itself and panic
/// rather than appear here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclareError {
    /// The name is already visible under the active variant's search
    /// policy: anywhere on the stack for strict declares, in the
    /// innermost scope for shadowing declares
    #[error("duplicate declaration of `{name}`")]
    Duplicate {
        /// The name that was redeclared
        name: String,
        /// Location of the first declaration, when one was recorded
        first: Option<SourceLoc>,
    },
}

impl DeclareError {
    /// The name involved in the conflict
    pub fn name(&self) -> &str {
        match self {
            Self::Duplicate { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_names_the_identifier() {
        let err = DeclareError::Duplicate {
            name: "main".to_string(),
            first: Some(SourceLoc::new("main.fen", 3)),
        };
        assert_eq!(err.to_string(), "duplicate declaration of `main`");
        assert_eq!(err.name(), "main");
    }
}
