//! Object and field definitions.
//!
//! An [`Object`] is a concrete structured type with an ordered field list.
//! Each [`Field`] either reads a static binding, delegates to a host method,
//! or leaves resolution to a method on the generated resolver trait.

use serde::{Deserialize, Serialize};

use crate::ir::{escape_keyword, to_snake_case};
use crate::types::Type;

/// Field argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arg {
    /// Argument name as declared in the schema; the lookup key at runtime.
    pub name: String,
    /// Argument type.
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Arg {
    /// Creates a new argument.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Returns the parameter name of the argument in generated signatures.
    ///
    /// The lookup key stays [`Arg::name`].
    #[must_use]
    pub fn param_name(&self) -> String {
        escape_keyword(&self.name)
    }
}

/// Where a field's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource<'a> {
    /// Direct read of a place expression.
    Bound(&'a str),
    /// Call of a host method expression.
    Delegated(&'a str),
    /// Call of a synthesized resolver trait method.
    Abstract,
}

/// Field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Schema-facing name, used as the dispatch key.
    pub graphql_name: String,
    /// Place expression read for bound fields, e.g. `it.title`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_name: Option<String>,
    /// Callable expression for delegated fields, e.g. `it.friends`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    /// Arguments in declaration order.
    #[serde(default)]
    pub args: Vec<Arg>,
    /// The call returns a bare value instead of a `Result`.
    #[serde(default)]
    pub no_err: bool,
    /// Result type.
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Field {
    /// Creates a field that needs a resolver method.
    #[must_use]
    pub fn resolved(graphql_name: impl Into<String>, ty: Type) -> Self {
        Self {
            graphql_name: graphql_name.into(),
            var_name: None,
            method_name: None,
            args: Vec::new(),
            no_err: false,
            ty,
        }
    }

    /// Creates a field bound to a place expression.
    #[must_use]
    pub fn bound(graphql_name: impl Into<String>, var_name: impl Into<String>, ty: Type) -> Self {
        Self {
            var_name: Some(var_name.into()),
            ..Self::resolved(graphql_name, ty)
        }
    }

    /// Creates a field delegated to a host method.
    #[must_use]
    pub fn delegated(
        graphql_name: impl Into<String>,
        method_name: impl Into<String>,
        ty: Type,
    ) -> Self {
        Self {
            method_name: Some(method_name.into()),
            ..Self::resolved(graphql_name, ty)
        }
    }

    /// Adds an argument.
    #[must_use]
    pub fn with_arg(mut self, arg: Arg) -> Self {
        self.args.push(arg);
        self
    }

    /// Marks the call as infallible.
    #[must_use]
    pub fn infallible(mut self) -> Self {
        self.no_err = true;
        self
    }

    /// Returns where the value of this field comes from.
    ///
    /// A field carrying both bindings is rejected by validation; if one slips
    /// through, the static binding wins.
    #[must_use]
    pub fn source(&self) -> FieldSource<'_> {
        match (&self.var_name, &self.method_name) {
            (Some(var), _) => FieldSource::Bound(var),
            (None, Some(method)) => FieldSource::Delegated(method),
            (None, None) => FieldSource::Abstract,
        }
    }

    /// Returns true if the field needs a resolver trait method.
    #[must_use]
    pub fn needs_resolver(&self) -> bool {
        self.var_name.is_none() && self.method_name.is_none()
    }
}

/// Object definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// Object name.
    pub name: String,
    /// Own type, without modifiers.
    #[serde(rename = "type")]
    pub ty: Type,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Interfaces and unions this object belongs to.
    #[serde(default)]
    pub satisfies: Vec<String>,
}

impl Object {
    /// Creates a new object with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            fields: Vec::new(),
            satisfies: Vec::new(),
        }
    }

    /// Adds a field to the object.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds an interface or union name to the satisfies list.
    #[must_use]
    pub fn with_satisfies(mut self, name: impl Into<String>) -> Self {
        self.satisfies.push(name.into());
        self
    }

    /// Returns true if the object is resolved without a receiver.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.ty.is_root()
    }

    /// Returns the schema names a value of this object matches, own name first.
    #[must_use]
    pub fn satisfies_table(&self) -> Vec<&str> {
        std::iter::once(self.ty.graphql_name.as_str())
            .chain(self.satisfies.iter().map(String::as_str))
            .collect()
    }

    /// Returns the resolver trait method name for one of this object's fields.
    #[must_use]
    pub fn resolver_method_name(&self, field: &Field) -> String {
        format!(
            "{}_{}",
            to_snake_case(&self.name),
            to_snake_case(&field.graphql_name)
        )
    }

    /// Returns the fields that need a resolver trait method.
    pub fn abstract_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.needs_resolver())
    }
}
