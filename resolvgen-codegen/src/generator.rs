//! Top-level generator.
//!
//! Validates the input once, then assembles the module in a fixed order:
//! header, namespace, dependency declarations, resolver trait, satisfies
//! tables, one dispatcher per object, schema constant.

use std::path::Path;

use resolvgen_schema::{GenerationInput, validate_input};

use crate::ast::{Item, Module};
use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::printer::print_module;
use crate::rust::module::MODULE_ALLOWS;
use crate::rust::{
    DispatcherGenerator, ModuleGenerator, ResolverTraitGenerator, SatisfiesGenerator,
};

/// Code generator for one validated input.
#[derive(Debug)]
pub struct Generator<'a> {
    input: &'a GenerationInput,
    config: CodegenConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default configuration.
    ///
    /// # Errors
    /// Returns `CodegenError::Model` if the input violates a model invariant.
    pub fn new(input: &'a GenerationInput) -> Result<Self, CodegenError> {
        Self::with_config(input, CodegenConfig::default())
    }

    /// Creates a generator with the given configuration.
    ///
    /// # Errors
    /// Returns `CodegenError` if the configuration or the input is invalid.
    pub fn with_config(
        input: &'a GenerationInput,
        config: CodegenConfig,
    ) -> Result<Self, CodegenError> {
        config.validate()?;
        validate_input(input)?;
        Ok(Self { input, config })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Builds the emission tree of the module.
    #[must_use]
    pub fn build_module(&self) -> Module {
        let scaffold = ModuleGenerator::new(self.input, &self.config);
        let dispatchers = DispatcherGenerator::new(&self.config);

        let mut items: Vec<Item> = scaffold.imports();
        items.push(ResolverTraitGenerator::new(self.input, &self.config).generate());
        items.extend(SatisfiesGenerator::new(self.input).generate());
        for object in &self.input.objects {
            if object.fields.is_empty() {
                tracing::warn!("Object {} has no fields", object.name);
            }
            items.push(dispatchers.generate(object));
        }
        items.push(scaffold.schema_constant());

        Module {
            header: scaffold.header(),
            attrs: vec![MODULE_ALLOWS.to_string()],
            name: self.input.package.clone(),
            items,
        }
    }

    /// Generates the module source text.
    #[must_use]
    pub fn generate(&self) -> String {
        let source = print_module(&self.build_module());
        tracing::info!(
            "Generated module {}: {} objects, {} resolver methods, {} bytes",
            self.input.package,
            self.input.objects.len(),
            self.input.abstract_field_count(),
            source.len()
        );
        source
    }

    /// Generates the module and writes it to `path`, creating parent
    /// directories as needed.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), CodegenError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.generate())?;
        tracing::info!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolvgen_schema::{Field, Import, ModelError, Object, Type};

    fn blog() -> GenerationInput {
        GenerationInput::new("blog")
            .with_import(Import::new("models", "crate::models"))
            .with_object(
                Object::new("Post", Type::object("Post", "Post"))
                    .with_field(Field::bound("title", "it.title", Type::scalar("String", "String")))
                    .with_field(Field::resolved("author", Type::object("User", "User").optional()))
                    .with_satisfies("Node"),
            )
            .with_object(
                Object::new("User", Type::object("User", "User"))
                    .with_field(Field::bound("name", "it.name", Type::scalar("String", "String"))),
            )
            .with_schema("type Post { title: String! author: User }")
    }

    #[test]
    fn test_module_item_order() {
        let input = blog();
        let generator = Generator::new(&input).expect("valid input");
        let module = generator.build_module();

        assert_eq!(module.name, "blog");
        let kinds: Vec<&str> = module
            .items
            .iter()
            .map(|item| match item {
                Item::Use { .. } | Item::UseGroup { .. } => "use",
                Item::Trait { .. } => "trait",
                Item::Static { .. } => "static",
                Item::Fn(_) => "fn",
                Item::Const { .. } => "const",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["use", "use", "trait", "static", "static", "fn", "fn", "const"]
        );
    }

    #[test]
    fn test_generate_is_deterministic() {
        let input = blog();
        let first = Generator::new(&input).expect("valid input").generate();
        let second = Generator::new(&input).expect("valid input").generate();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let mut input = blog();
        input.objects[0].fields[0].method_name = Some("it.title".to_string());
        let result = Generator::new(&input);
        assert!(matches!(
            result,
            Err(CodegenError::Model(ModelError::ConflictingBinding { .. }))
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let input = blog();
        let result = Generator::with_config(&input, CodegenConfig::new().runtime_path("::"));
        assert!(matches!(result, Err(CodegenError::Generation { .. })));
    }

    #[test]
    fn test_write_to_file() {
        let input = blog();
        let generator = Generator::new(&input).expect("valid input");
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("generated").join("blog.rs");

        generator.write_to_file(&path).expect("Failed to write");
        let written = std::fs::read_to_string(&path).expect("Failed to read");
        assert_eq!(written, generator.generate());
    }
}
