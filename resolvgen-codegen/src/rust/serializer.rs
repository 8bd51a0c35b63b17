//! Type-directed value serialization.
//!
//! [`ValueSerializer::serialize`] lowers a type occurrence plus a value
//! reference into statements that bind the serialized `Value` to a result
//! name. Modifiers are peeled strictly outermost first and independently of
//! the named type, so one recursive procedure covers every stacking of
//! optional and list wrappers.
//!
//! A value reference is either a *place* (an owned binding such as `res`) or
//! already *dereferenced* to a borrow (`&T`, such as an `if let Some(..)`
//! binding or a list element). Base cases borrow places and pass borrows
//! through untouched.

use resolvgen_schema::ir::{escape_keyword, to_snake_case};
use resolvgen_schema::{Modifier, Type};

use crate::ast::{Arm, Expr, Stmt};

/// Expression for the sub-selections of the field being serialized.
pub const FIELD_SELECTIONS: &str = "&field.selections";

/// Canonical scalar-to-wire mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarKind {
    /// `Int`.
    Int,
    /// `Float`.
    Float,
    /// `String`.
    String,
    /// `Boolean`.
    Boolean,
    /// `ID`.
    Id,
    /// Any other scalar, serialized by its own constructor.
    Custom(String),
}

impl ScalarKind {
    /// Classifies a scalar by its schema name.
    #[must_use]
    pub fn from_graphql_name(name: &str) -> Self {
        match name {
            "Int" => Self::Int,
            "Float" => Self::Float,
            "String" => Self::String,
            "Boolean" => Self::Boolean,
            "ID" => Self::Id,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Returns the `Value` constructor that serializes this scalar.
    #[must_use]
    pub fn constructor(&self) -> String {
        let name = match self {
            Self::Int => "int".to_string(),
            Self::Float => "float".to_string(),
            Self::String => "string".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Id => "id".to_string(),
            Self::Custom(name) => escape_keyword(&to_snake_case(name)),
        };
        format!("Value::{name}")
    }
}

/// Variant dispatch table for one polymorphic type.
///
/// Built once from the type's implementors; each entry maps an enum variant
/// of the interface's host type to the dispatcher of the implementor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable {
    type_name: String,
    entries: Vec<DispatchEntry>,
}

/// One implementor of a polymorphic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchEntry {
    /// Enum variant path, e.g. `Node::Post`.
    pub variant: String,
    /// Dispatcher function, e.g. `resolve_post`.
    pub dispatcher: String,
}

impl DispatchTable {
    /// Builds the table for a polymorphic type.
    #[must_use]
    pub fn for_type(ty: &Type) -> Self {
        let entries = ty
            .implementors
            .iter()
            .map(|implementor| DispatchEntry {
                variant: format!("{}::{}", ty.name, implementor.variant_name()),
                dispatcher: implementor.dispatcher_name(),
            })
            .collect();
        Self {
            type_name: ty.graphql_name.clone(),
            entries,
        }
    }

    /// Returns the entries in implementor order.
    #[must_use]
    pub fn entries(&self) -> &[DispatchEntry] {
        &self.entries
    }

    /// Builds the match arms, ending with the unexpected-type abort.
    #[must_use]
    pub fn arms(&self, binding: &str, selections: &str) -> Vec<Arm> {
        let mut arms: Vec<Arm> = self
            .entries
            .iter()
            .map(|entry| {
                Arm::expr(
                    format!("{}({binding})", entry.variant),
                    Expr::call(
                        &entry.dispatcher,
                        vec![Expr::path("ec"), Expr::path(selections), Expr::path(binding)],
                    ),
                )
            })
            .collect();
        arms.push(Arm::expr(
            "_",
            Expr::Macro {
                name: "panic".to_string(),
                args: vec![Expr::Str(format!(
                    "unexpected type for {}: no matching implementor",
                    self.type_name
                ))],
            },
        ));
        arms
    }
}

/// Lowers type occurrences into serialization statements.
#[derive(Debug, Clone)]
pub struct ValueSerializer {
    selections: String,
}

impl ValueSerializer {
    /// Creates a serializer reading sub-selections from the current field.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selections: FIELD_SELECTIONS.to_string(),
        }
    }

    /// Creates a serializer with a custom sub-selection expression.
    #[must_use]
    pub fn with_selections(selections: impl Into<String>) -> Self {
        Self {
            selections: selections.into(),
        }
    }

    /// Emits statements binding the serialized form of `value` to `result`.
    ///
    /// # Arguments
    /// * `target` - Type occurrence of the value, modifiers included
    /// * `value` - Name of the binding holding the value
    /// * `dereferenced` - True if `value` is already a borrow
    /// * `result` - Name to bind the serialized `Value` to
    #[must_use]
    pub fn serialize(
        &self,
        target: &Type,
        value: &str,
        dereferenced: bool,
        result: &str,
    ) -> Vec<Stmt> {
        let mut out = Vec::new();
        self.lower(target, value, &target.modifiers, dereferenced, result, 0, &mut out);
        out
    }

    #[allow(clippy::too_many_arguments)]
    fn lower(
        &self,
        target: &Type,
        value: &str,
        remaining: &[Modifier],
        dereferenced: bool,
        result: &str,
        depth: usize,
        out: &mut Vec<Stmt>,
    ) {
        let inner_result = numbered(result, depth + 1);

        match remaining.split_first() {
            Some((Modifier::Optional, rest)) => {
                let binding = numbered("res", depth + 1);
                let mut body = Vec::new();
                self.lower(target, &binding, rest, true, &inner_result, depth + 1, &mut body);
                body.push(Stmt::Assign {
                    target: result.to_string(),
                    value: Expr::path(&inner_result),
                });

                out.push(Stmt::let_mut(result, Expr::path("Value::Null")));
                out.push(Stmt::IfLet {
                    pattern: format!("Some({binding})"),
                    value: borrowed(value, dereferenced),
                    body,
                });
            }
            Some((Modifier::List, rest)) => {
                let element = numbered("val", depth + 1);
                let mut body = Vec::new();
                self.lower(target, &element, rest, true, &inner_result, depth + 1, &mut body);
                body.push(Stmt::Expr(Expr::method(
                    Expr::path(result),
                    "push",
                    vec![Expr::path(&inner_result)],
                )));

                out.push(Stmt::let_mut(result, Expr::call("Vec::new", vec![])));
                out.push(Stmt::For {
                    binding: element,
                    iter: Expr::method(Expr::path(value), "iter", vec![]),
                    body,
                });
                out.push(Stmt::let_(
                    result,
                    Expr::call("Value::Array", vec![Expr::path(result)]),
                ));
            }
            None if target.basic => {
                let constructor = ScalarKind::from_graphql_name(&target.graphql_name).constructor();
                out.push(Stmt::let_(
                    result,
                    Expr::call(constructor, vec![borrowed(value, dereferenced)]),
                ));
            }
            None if target.is_polymorphic() => {
                let binding = numbered("variant", depth + 1);
                let arms = DispatchTable::for_type(target).arms(&binding, &self.selections);
                out.push(Stmt::let_(
                    result,
                    Expr::match_(borrowed(value, dereferenced), arms),
                ));
            }
            None => {
                out.push(Stmt::let_(
                    result,
                    Expr::call(
                        target.dispatcher_name(),
                        vec![
                            Expr::path("ec"),
                            Expr::path(&self.selections),
                            borrowed(value, dereferenced),
                        ],
                    ),
                ));
            }
        }
    }
}

impl Default for ValueSerializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `value` as a borrow, adding `&` to places.
fn borrowed(value: &str, dereferenced: bool) -> Expr {
    if dereferenced {
        Expr::path(value)
    } else {
        Expr::borrow(Expr::path(value))
    }
}

/// Appends the nesting depth to a base name, leaving depth zero bare.
fn numbered(base: &str, depth: usize) -> String {
    let base = base.trim_end_matches(|c: char| c.is_ascii_digit());
    if depth == 0 {
        base.to_string()
    } else {
        format!("{base}{depth}")
    }
}
