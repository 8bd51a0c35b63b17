//! Model validation.
//!
//! The generator trusts the extractor for schema semantics (cycles, undefined
//! types are not checked here). What it does check are the structural
//! preconditions it relies on to emit well-formed Rust: unique dispatch keys,
//! at most one binding per field, consistent type occurrences, and host-side
//! and generated names that actually parse as Rust.

use std::collections::HashSet;

use crate::error::ModelError;
use crate::ir::{GenerationInput, Import, escape_keyword, to_snake_case};
use crate::objects::{Field, Object};
use crate::types::Type;

/// Validates a generation input.
///
/// # Arguments
/// * `input` - The input to validate
///
/// # Errors
/// Returns the first `ModelError` found.
pub fn validate_input(input: &GenerationInput) -> Result<(), ModelError> {
    check_ident(&input.package, "package name")?;
    validate_imports(&input.imports)?;
    validate_objects(&input.objects)?;
    Ok(())
}

/// Validates dependency declarations.
fn validate_imports(imports: &[Import]) -> Result<(), ModelError> {
    for import in imports {
        check_ident(&import.alias, "import alias")?;
        if syn::parse_str::<syn::Path>(&import.path).is_err() {
            return Err(ModelError::invalid_rust(
                "path",
                &import.path,
                format!("import '{}'", import.alias),
            ));
        }
    }
    Ok(())
}

/// Validates all objects and the names generated from them.
fn validate_objects(objects: &[Object]) -> Result<(), ModelError> {
    let mut seen_names = HashSet::new();
    let mut seen_dispatchers = HashSet::new();
    let mut seen_methods = HashSet::new();

    for object in objects {
        if object.name.is_empty() {
            return Err(ModelError::empty_name("object name"));
        }
        if !seen_names.insert(object.name.as_str()) {
            return Err(ModelError::DuplicateObject {
                name: object.name.clone(),
            });
        }
        validate_object_type(object)?;
        check_ident(
            &object.ty.satisfies_name(),
            &format!("satisfies table of object '{}'", object.name),
        )?;
        if !seen_dispatchers.insert(object.ty.dispatcher_name()) {
            return Err(ModelError::DuplicateObject {
                name: object.ty.graphql_name.clone(),
            });
        }

        validate_fields(object)?;

        for field in object.abstract_fields() {
            let method = object.resolver_method_name(field);
            check_ident(
                &method,
                &format!("resolver method of '{}.{}'", object.name, field.graphql_name),
            )?;
            if !seen_methods.insert(method.clone()) {
                return Err(ModelError::DuplicateResolverMethod { method });
            }
        }
    }

    Ok(())
}

/// Validates an object's own type occurrence.
fn validate_object_type(object: &Object) -> Result<(), ModelError> {
    let ty = &object.ty;
    if !ty.modifiers.is_empty() {
        return Err(ModelError::invalid_object_type(
            &object.name,
            "own type carries modifiers",
        ));
    }
    if ty.basic {
        return Err(ModelError::invalid_object_type(&object.name, "own type is basic"));
    }
    if ty.is_polymorphic() {
        return Err(ModelError::invalid_object_type(
            &object.name,
            "own type is polymorphic",
        ));
    }
    validate_type(ty, &format!("object '{}'", object.name))
}

/// Validates the fields of one object.
fn validate_fields(object: &Object) -> Result<(), ModelError> {
    let mut seen_keys = HashSet::new();

    for field in &object.fields {
        let context = format!("field '{}.{}'", object.name, field.graphql_name);

        if field.graphql_name.is_empty() {
            return Err(ModelError::empty_name(format!(
                "field of object '{}'",
                object.name
            )));
        }
        if !seen_keys.insert(field.graphql_name.as_str()) {
            return Err(ModelError::duplicate_field(&object.name, &field.graphql_name));
        }
        if field.var_name.is_some() && field.method_name.is_some() {
            return Err(ModelError::conflicting_binding(
                &object.name,
                &field.graphql_name,
            ));
        }

        validate_binding(field, &context)?;
        validate_args(object, field)?;
        validate_type(&field.ty, &context)?;
    }

    Ok(())
}

/// Validates that a field's binding parses as a Rust expression.
fn validate_binding(field: &Field, context: &str) -> Result<(), ModelError> {
    for expr in [&field.var_name, &field.method_name].into_iter().flatten() {
        if syn::parse_str::<syn::Expr>(expr).is_err() {
            return Err(ModelError::invalid_rust("expression", expr, context));
        }
    }
    Ok(())
}

/// Validates a field's arguments.
fn validate_args(object: &Object, field: &Field) -> Result<(), ModelError> {
    let mut seen = HashSet::new();

    for arg in &field.args {
        let context = format!(
            "argument '{}' of '{}.{}'",
            arg.name, object.name, field.graphql_name
        );
        check_ident(&arg.param_name(), &context)?;
        if matches!(arg.name.as_str(), "ctx" | "it") {
            return Err(ModelError::invalid_rust("parameter name", &arg.name, context));
        }
        if !seen.insert(arg.name.as_str()) {
            return Err(ModelError::DuplicateArgument {
                object: object.name.clone(),
                field: field.graphql_name.clone(),
                arg: arg.name.clone(),
            });
        }
        validate_type(&arg.ty, &context)?;
    }

    Ok(())
}

/// Validates a single type occurrence and its implementors.
pub fn validate_type(ty: &Type, context: &str) -> Result<(), ModelError> {
    if ty.name.is_empty() {
        return Err(ModelError::empty_name(format!("type name in {context}")));
    }
    if ty.graphql_name.is_empty() {
        return Err(ModelError::empty_name(format!("schema type name in {context}")));
    }
    if ty.basic && ty.is_polymorphic() {
        return Err(ModelError::BasicPolymorphic {
            type_name: ty.name.clone(),
        });
    }
    if syn::parse_str::<syn::Type>(&ty.host_name()).is_err() {
        return Err(ModelError::invalid_rust("type", ty.host_name(), context));
    }
    validate_generated_name(ty, context)?;

    let mut seen_variants = HashSet::new();
    for implementor in &ty.implementors {
        let reason = if implementor.basic {
            Some("implementor is basic")
        } else if implementor.is_polymorphic() {
            Some("implementor is itself polymorphic")
        } else if !implementor.modifiers.is_empty() {
            Some("implementor carries modifiers")
        } else if !seen_variants.insert(implementor.variant_name()) {
            Some("implementor is listed twice")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(ModelError::invalid_implementor(
                &ty.name,
                &implementor.name,
                reason,
            ));
        }
        validate_type(implementor, context)?;
    }

    Ok(())
}

/// Checks the name the serializer emits for a value of this type: the scalar
/// constructor, the variant paths of a polymorphic type, or the dispatcher.
fn validate_generated_name(ty: &Type, context: &str) -> Result<(), ModelError> {
    if ty.basic {
        return check_ident(&escape_keyword(&to_snake_case(&ty.graphql_name)), context);
    }
    if ty.is_polymorphic() {
        for implementor in &ty.implementors {
            let pattern = format!("{}::{}(v)", ty.name, implementor.variant_name());
            if syn::parse::Parser::parse_str(syn::Pat::parse_single, &pattern).is_err() {
                return Err(ModelError::invalid_rust("pattern", pattern, context));
            }
        }
        return Ok(());
    }
    check_ident(&ty.dispatcher_name(), context)
}

/// Checks that a name is a Rust identifier.
fn check_ident(name: &str, context: &str) -> Result<(), ModelError> {
    if name.is_empty() {
        return Err(ModelError::empty_name(context));
    }
    if syn::parse_str::<syn::Ident>(name).is_err() {
        return Err(ModelError::invalid_rust("identifier", name, context));
    }
    Ok(())
}
