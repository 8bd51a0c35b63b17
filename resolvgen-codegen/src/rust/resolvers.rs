//! Resolver trait generation.
//!
//! Every field with neither a variable binding nor a delegated method becomes
//! one required method on the resolver trait. Implementing the trait is how
//! the user supplies the remaining field logic.

use resolvgen_schema::{Field, GenerationInput, Object};

use crate::ast::{Item, Param, Signature};
use crate::config::CodegenConfig;

/// Generator for the resolver trait.
pub struct ResolverTraitGenerator<'a> {
    input: &'a GenerationInput,
    config: &'a CodegenConfig,
}

impl<'a> ResolverTraitGenerator<'a> {
    /// Creates a new resolver trait generator.
    #[must_use]
    pub fn new(input: &'a GenerationInput, config: &'a CodegenConfig) -> Self {
        Self { input, config }
    }

    /// Generates the trait, with methods in object then field order.
    #[must_use]
    pub fn generate(&self) -> Item {
        let methods = self
            .input
            .objects
            .iter()
            .flat_map(|object| object.abstract_fields().map(move |field| (object, field)))
            .map(|(object, field)| {
                let sig = method_signature(object, field);
                tracing::debug!("Resolver method {} requires {} parameters", sig.name, sig.params.len());
                sig
            })
            .collect();

        Item::Trait {
            name: self.config.trait_name().to_string(),
            methods,
        }
    }
}

/// Builds the trait method signature for an abstract field.
///
/// Parameters: context, then the receiver unless the object is the root, then
/// one parameter per argument.
#[must_use]
pub fn method_signature(object: &Object, field: &Field) -> Signature {
    let mut params = vec![Param::new("ctx", "&Context")];
    if !object.is_root() {
        params.push(Param::new("it", format!("&{}", object.ty.host_name())));
    }
    params.extend(
        field
            .args
            .iter()
            .map(|arg| Param::new(arg.param_name(), arg.ty.host_name())),
    );

    Signature {
        name: object.resolver_method_name(field),
        generics: None,
        self_ref: true,
        params,
        ret: format!("Result<{}, Error>", field.ty.host_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::print_item;
    use resolvgen_schema::{Arg, Type};

    fn blog() -> GenerationInput {
        GenerationInput::new("blog")
            .with_object(
                Object::new("Query", Type::root("Query")).with_field(
                    Field::resolved("posts", Type::object("Post", "Post").list())
                        .with_arg(Arg::new("first", Type::scalar("i32", "Int").optional()))
                        .with_arg(Arg::new("tag", Type::scalar("String", "String"))),
                ),
            )
            .with_object(
                Object::new("Post", Type::object("models::Post", "Post"))
                    .with_field(Field::bound("title", "it.title", Type::scalar("String", "String")))
                    .with_field(Field::delegated("slug", "it.slug", Type::scalar("String", "String")))
                    .with_field(Field::resolved("author", Type::object("User", "User").optional())),
            )
    }

    #[test]
    fn test_one_method_per_abstract_field() {
        let input = blog();
        let config = CodegenConfig::default();
        let Item::Trait { name, methods } = ResolverTraitGenerator::new(&input, &config).generate()
        else {
            panic!("expected trait");
        };
        assert_eq!(name, "Resolvers");
        let names: Vec<_> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["query_posts", "post_author"]);
        assert_eq!(methods.len(), input.abstract_field_count());
    }

    #[test]
    fn test_parameter_counts() {
        let input = blog();
        for object in &input.objects {
            for field in object.abstract_fields() {
                let sig = method_signature(object, field);
                let receiver = usize::from(!object.is_root());
                assert_eq!(sig.params.len(), 1 + receiver + field.args.len());
                assert_eq!(sig.params[0].name, "ctx");
                assert!(sig.self_ref);
            }
        }
    }

    #[test]
    fn test_trait_text() {
        let input = blog();
        let config = CodegenConfig::default();
        let printed = print_item(&ResolverTraitGenerator::new(&input, &config).generate());
        let expected = "\
pub trait Resolvers {
    fn query_posts(&self, ctx: &Context, first: Option<i32>, tag: String) -> Result<Vec<Post>, Error>;
    fn post_author(&self, ctx: &Context, it: &models::Post) -> Result<Option<User>, Error>;
}
";
        assert_eq!(printed, expected);
    }

    #[test]
    fn test_keyword_argument_is_raw_escaped() {
        let object = Object::new("Query", Type::root("Query")).with_field(
            Field::resolved("search", Type::object("Post", "Post").list())
                .with_arg(Arg::new("type", Type::scalar("String", "String"))),
        );
        let sig = method_signature(&object, &object.fields[0]);
        assert_eq!(sig.params[1].name, "r#type");
    }

    #[test]
    fn test_empty_trait_when_everything_is_bound() {
        let input = GenerationInput::new("blog").with_object(
            Object::new("Tag", Type::object("Tag", "Tag"))
                .with_field(Field::bound("name", "it.name", Type::scalar("String", "String"))),
        );
        let config = CodegenConfig::new().resolver_trait("TagResolvers");
        let printed = print_item(&ResolverTraitGenerator::new(&input, &config).generate());
        assert_eq!(printed, "pub trait TagResolvers {}\n");
    }
}
