//! Error types for model loading and validation.

use thiserror::Error;

/// Error type for loading a generation input.
#[derive(Debug, Error)]
pub enum LoadError {
    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for model validation.
///
/// Every variant is a precondition violation on the extracted model. The
/// generator refuses to emit anything once one of these is reported.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A name that must be present is empty.
    #[error("empty name in {context}")]
    EmptyName {
        /// Where the empty name was found.
        context: String,
    },

    /// Two objects share a name.
    #[error("duplicate object '{name}'")]
    DuplicateObject {
        /// Object name.
        name: String,
    },

    /// Two fields of one object share a dispatch key.
    #[error("duplicate field '{field}' in object '{object}'")]
    DuplicateField {
        /// Object name.
        object: String,
        /// Dispatch key.
        field: String,
    },

    /// Two arguments of one field share a name.
    #[error("duplicate argument '{arg}' on field '{object}.{field}'")]
    DuplicateArgument {
        /// Object name.
        object: String,
        /// Dispatch key.
        field: String,
        /// Argument name.
        arg: String,
    },

    /// A field carries both a static binding and a delegated call.
    #[error("field '{object}.{field}' has both a variable binding and a method")]
    ConflictingBinding {
        /// Object name.
        object: String,
        /// Dispatch key.
        field: String,
    },

    /// A type is marked basic but also lists implementors.
    #[error("type '{type_name}' is both basic and polymorphic")]
    BasicPolymorphic {
        /// Type name.
        type_name: String,
    },

    /// An implementor is not a plain object type.
    #[error("implementor '{implementor}' of '{type_name}' is invalid: {reason}")]
    InvalidImplementor {
        /// Polymorphic type name.
        type_name: String,
        /// Implementor name.
        implementor: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An object's own type is not a plain named type.
    #[error("object '{object}' has an invalid own type: {reason}")]
    InvalidObjectType {
        /// Object name.
        object: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Two abstract fields map onto the same resolver method.
    #[error("resolver method '{method}' would be generated twice")]
    DuplicateResolverMethod {
        /// Method name.
        method: String,
    },

    /// A host-side name or expression is not valid Rust.
    #[error("invalid Rust {kind} '{value}' in {context}")]
    InvalidRust {
        /// What was expected (type, expression, path, identifier).
        kind: &'static str,
        /// Offending text.
        value: String,
        /// Where it was found.
        context: String,
    },
}

impl ModelError {
    /// Creates an empty name error.
    pub fn empty_name(context: impl Into<String>) -> Self {
        Self::EmptyName {
            context: context.into(),
        }
    }

    /// Creates a duplicate field error.
    pub fn duplicate_field(object: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            object: object.into(),
            field: field.into(),
        }
    }

    /// Creates a conflicting binding error.
    pub fn conflicting_binding(object: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ConflictingBinding {
            object: object.into(),
            field: field.into(),
        }
    }

    /// Creates an invalid implementor error.
    pub fn invalid_implementor(
        type_name: impl Into<String>,
        implementor: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidImplementor {
            type_name: type_name.into(),
            implementor: implementor.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid object type error.
    pub fn invalid_object_type(object: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidObjectType {
            object: object.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid Rust syntax error.
    pub fn invalid_rust(
        kind: &'static str,
        value: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::InvalidRust {
            kind,
            value: value.into(),
            context: context.into(),
        }
    }
}
