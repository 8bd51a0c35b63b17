//! Type occurrence definitions.
//!
//! A [`Type`] describes one use site of a schema type: the named type itself
//! plus the stack of optional/list wrappers applied at that site. The same
//! named type routinely shows up with different modifier stacks, so the
//! modifiers live on the occurrence, not on a shared type table.

use serde::{Deserialize, Serialize};

use crate::ir::{to_screaming_snake_case, to_snake_case};

/// Host name of the synthetic root type.
///
/// Objects whose own type carries this name are resolved without a receiver.
pub const ROOT_TYPE_NAME: &str = "()";

/// Structural wrapper on a type occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Value may be absent.
    Optional,
    /// Zero or more values.
    List,
}

impl Modifier {
    /// Wraps a host type name in this modifier's Rust representation.
    #[must_use]
    pub fn wrap_host(&self, inner: &str) -> String {
        match self {
            Self::Optional => format!("Option<{inner}>"),
            Self::List => format!("Vec<{inner}>"),
        }
    }
}

/// A single type occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    /// Host-side (Rust) name of the named type, without modifiers.
    pub name: String,
    /// Schema-facing name.
    pub graphql_name: String,
    /// True for scalars.
    #[serde(default)]
    pub basic: bool,
    /// Modifier stack, outermost first.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Concrete object types of an interface or union.
    #[serde(default)]
    pub implementors: Vec<Type>,
}

impl Type {
    /// Creates a scalar type occurrence.
    #[must_use]
    pub fn scalar(name: impl Into<String>, graphql_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graphql_name: graphql_name.into(),
            basic: true,
            modifiers: Vec::new(),
            implementors: Vec::new(),
        }
    }

    /// Creates an object type occurrence.
    #[must_use]
    pub fn object(name: impl Into<String>, graphql_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graphql_name: graphql_name.into(),
            basic: false,
            modifiers: Vec::new(),
            implementors: Vec::new(),
        }
    }

    /// Creates an interface or union type occurrence.
    #[must_use]
    pub fn polymorphic(
        name: impl Into<String>,
        graphql_name: impl Into<String>,
        implementors: Vec<Type>,
    ) -> Self {
        Self {
            name: name.into(),
            graphql_name: graphql_name.into(),
            basic: false,
            modifiers: Vec::new(),
            implementors,
        }
    }

    /// Creates the synthetic root type.
    #[must_use]
    pub fn root(graphql_name: impl Into<String>) -> Self {
        Self::object(ROOT_TYPE_NAME, graphql_name)
    }

    /// Wraps the occurrence in one more modifier, which becomes the outermost.
    #[must_use]
    pub fn wrap(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(0, modifier);
        self
    }

    /// Wraps the occurrence as optional.
    #[must_use]
    pub fn optional(self) -> Self {
        self.wrap(Modifier::Optional)
    }

    /// Wraps the occurrence as a list.
    #[must_use]
    pub fn list(self) -> Self {
        self.wrap(Modifier::List)
    }

    /// Returns true for interfaces and unions.
    #[must_use]
    pub fn is_polymorphic(&self) -> bool {
        !self.implementors.is_empty()
    }

    /// Returns true for the synthetic root type.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.name == ROOT_TYPE_NAME
    }

    /// Returns the full host type, modifiers included.
    ///
    /// `[Optional, List]` over `Post` yields `Option<Vec<Post>>`.
    #[must_use]
    pub fn host_name(&self) -> String {
        self.modifiers
            .iter()
            .rev()
            .fold(self.name.clone(), |inner, m| m.wrap_host(&inner))
    }

    /// Returns the last path segment of the host name.
    ///
    /// Used as the enum variant name when this type implements an interface.
    #[must_use]
    pub fn variant_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }

    /// Returns the name of the generated dispatcher function for this type.
    #[must_use]
    pub fn dispatcher_name(&self) -> String {
        format!("resolve_{}", to_snake_case(&self.graphql_name))
    }

    /// Returns the name of the generated satisfies table for this type.
    #[must_use]
    pub fn satisfies_name(&self) -> String {
        format!("{}_SATISFIES", to_screaming_snake_case(&self.graphql_name))
    }
}
