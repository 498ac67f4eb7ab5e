//! Type declaration errors

use thiserror::Error;

/// Errors that can occur while declaring types in a context
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TypeError {
    /// A type with the same name is already declared
    #[error("Duplicate type: `{name}` is already declared")]
    DuplicateType {
        /// Name of the conflicting declaration
        name: String,
    },

    /// The declared parent handle does not resolve in this context
    #[error("Undefined parent: `{name}` extends a type unknown to this context")]
    UndefinedParent {
        /// Name of the type being declared
        name: String,
    },
}
