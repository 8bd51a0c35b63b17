//! Field dispatcher generation.
//!
//! One dispatcher per object: it collects the requested fields for the
//! object's satisfies table, evaluates each one according to its source and
//! serializes the result under the field's response alias.
//!
//! Runtime contract encoded here:
//! - a field whose call returns `Err` is reported through `ec.error` once,
//!   left out of the result, and the loop moves on to the next field;
//! - a requested field the object does not declare aborts with `panic!`.

use resolvgen_schema::{Field, FieldSource, Object};

use crate::ast::{Arm, Expr, Function, Item, Param, Signature, Stmt};
use crate::config::CodegenConfig;
use crate::rust::serializer::ValueSerializer;

/// Generator for per-object dispatcher functions.
pub struct DispatcherGenerator<'a> {
    config: &'a CodegenConfig,
    serializer: ValueSerializer,
}

impl<'a> DispatcherGenerator<'a> {
    /// Creates a new dispatcher generator.
    #[must_use]
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self {
            config,
            serializer: ValueSerializer::new(),
        }
    }

    /// Generates the dispatcher for one object.
    #[must_use]
    pub fn generate(&self, object: &Object) -> Item {
        tracing::debug!(
            "Generating dispatcher {} for object {} ({} fields)",
            object.ty.dispatcher_name(),
            object.name,
            object.fields.len()
        );

        let sig = Signature {
            name: object.ty.dispatcher_name(),
            generics: Some(format!("R: {} + ?Sized", self.config.trait_name())),
            self_ref: false,
            params: vec![
                Param::new("ec", "&ExecutionContext<'_, R>"),
                Param::new("sel", "&[Selection]"),
                Param::new("it", format!("&{}", object.ty.host_name())),
            ],
            ret: "Value".to_string(),
        };

        let mut arms: Vec<Arm> = object
            .fields
            .iter()
            .map(|field| self.field_arm(object, field))
            .collect();
        arms.push(Arm::expr(
            "other",
            Expr::Macro {
                name: "panic".to_string(),
                args: vec![
                    Expr::Str("unknown field {:?}".to_string()),
                    Expr::path("other"),
                ],
            },
        ));

        let body = vec![
            Stmt::let_(
                "grouped_field_set",
                Expr::method(
                    Expr::path("ec"),
                    "collect_fields",
                    vec![Expr::path("sel"), Expr::path(object.ty.satisfies_name())],
                ),
            ),
            Stmt::let_mut("result_map", Expr::call("Map::new", vec![])),
            Stmt::For {
                binding: "field".to_string(),
                iter: Expr::path("grouped_field_set"),
                body: vec![Stmt::Expr(Expr::match_(
                    Expr::method(Expr::path("field.name"), "as_str", vec![]),
                    arms,
                ))],
            },
            Stmt::Tail(Expr::call("Value::Map", vec![Expr::path("result_map")])),
        ];

        Item::Fn(Function { sig, body })
    }

    /// Builds the match arm evaluating and serializing one field.
    fn field_arm(&self, object: &Object, field: &Field) -> Arm {
        let mut stmts = Vec::new();

        let dereferenced = match field.source() {
            FieldSource::Bound(var) => {
                stmts.push(Stmt::let_("res", Expr::borrow(Expr::path(var))));
                true
            }
            FieldSource::Delegated(method) => {
                let call = Expr::call(method, coerced_args(field));
                stmts.push(bind_call(call, field.no_err));
                false
            }
            FieldSource::Abstract => {
                let mut args = vec![Expr::method(Expr::path("ec"), "context", vec![])];
                if !object.is_root() {
                    args.push(Expr::path("it"));
                }
                args.extend(coerced_args(field));
                let call = Expr::method(
                    Expr::method(Expr::path("ec"), "resolvers", vec![]),
                    object.resolver_method_name(field),
                    args,
                );
                stmts.push(bind_call(call, field.no_err));
                false
            }
        };

        stmts.extend(
            self.serializer
                .serialize(&field.ty, "res", dereferenced, "json"),
        );
        stmts.push(Stmt::Expr(Expr::method(
            Expr::path("result_map"),
            "insert",
            vec![
                Expr::method(Expr::path("field.alias"), "clone", vec![]),
                Expr::path("json"),
            ],
        )));

        Arm::block(format!("{:?}", field.graphql_name), stmts)
    }
}

/// Reads each argument from the selection's argument bag.
fn coerced_args(field: &Field) -> Vec<Expr> {
    field
        .args
        .iter()
        .map(|arg| {
            Expr::method(
                Expr::path("field"),
                format!("arg::<{}>", arg.ty.host_name()),
                vec![Expr::Str(arg.name.clone())],
            )
        })
        .collect()
}

/// Binds a call result to `res`, routing errors to the sink.
fn bind_call(call: Expr, no_err: bool) -> Stmt {
    if no_err {
        return Stmt::let_("res", call);
    }
    Stmt::let_(
        "res",
        Expr::match_(
            call,
            vec![
                Arm::expr("Ok(res)", Expr::path("res")),
                Arm::block(
                    "Err(err)",
                    vec![
                        Stmt::Expr(Expr::method(
                            Expr::path("ec"),
                            "error",
                            vec![Expr::path("err")],
                        )),
                        Stmt::Continue,
                    ],
                ),
            ],
        ),
    )
}
