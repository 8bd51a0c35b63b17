//! Module scaffolding: header, dependency declarations and the schema
//! constant.

use resolvgen_schema::{GenerationInput, Import};

use crate::ast::{Expr, Item};
use crate::config::{CodegenConfig, RUNTIME_PRELUDE};

/// Header line marking the file as generated.
pub const GENERATED_HEADER: &str = "Code generated by resolvgen. DO NOT EDIT.";

/// Lints silenced on the generated module.
pub const MODULE_ALLOWS: &str =
    "allow(dead_code, unused_imports, unused_mut, unused_variables, unreachable_patterns)";

/// Name of the constant holding the schema text.
pub const SCHEMA_CONST: &str = "SCHEMA";

/// Generator for the parts of the module that do not depend on objects.
pub struct ModuleGenerator<'a> {
    input: &'a GenerationInput,
    config: &'a CodegenConfig,
}

impl<'a> ModuleGenerator<'a> {
    /// Creates a new module generator.
    #[must_use]
    pub fn new(input: &'a GenerationInput, config: &'a CodegenConfig) -> Self {
        Self { input, config }
    }

    /// Returns the header comment lines.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        if self.config.has_header() {
            vec![GENERATED_HEADER.to_string()]
        } else {
            Vec::new()
        }
    }

    /// Generates the runtime prelude import followed by the declared imports.
    #[must_use]
    pub fn imports(&self) -> Vec<Item> {
        let mut items = vec![Item::UseGroup {
            path: self.config.runtime().to_string(),
            names: RUNTIME_PRELUDE.iter().map(|s| (*s).to_string()).collect(),
        }];
        items.extend(self.input.imports.iter().map(import_item));
        items
    }

    /// Generates the constant holding the verbatim schema text.
    #[must_use]
    pub fn schema_constant(&self) -> Item {
        Item::Const {
            name: SCHEMA_CONST.to_string(),
            ty: "&str".to_string(),
            value: Expr::RawStr(self.input.schema_raw.clone()),
        }
    }
}

/// Builds the `use` declaration for one import.
#[must_use]
pub fn import_item(import: &Import) -> Item {
    Item::Use {
        path: import.path.clone(),
        alias: (!import.is_plain()).then(|| import.alias.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::print_item;

    #[test]
    fn test_import_item() {
        assert_eq!(
            print_item(&import_item(&Import::new("models", "crate::models"))),
            "use crate::models;\n"
        );
        assert_eq!(
            print_item(&import_item(&Import::new("m", "crate::models"))),
            "use crate::models as m;\n"
        );
    }

    #[test]
    fn test_imports_keep_order_after_prelude() {
        let input = GenerationInput::new("blog")
            .with_import(Import::new("zeta", "crate::zeta"))
            .with_import(Import::new("alpha", "crate::alpha"));
        let config = CodegenConfig::new().runtime_path("crate::runtime");
        let items = ModuleGenerator::new(&input, &config).imports();

        let printed: Vec<String> = items.iter().map(print_item).collect();
        assert_eq!(
            printed,
            vec![
                "use crate::runtime::{Context, Error, ExecutionContext, Map, Selection, Value};\n",
                "use crate::zeta;\n",
                "use crate::alpha;\n",
            ]
        );
    }

    #[test]
    fn test_schema_constant_is_verbatim() {
        let schema = "type Query {\n  \"doc\"# quoted\n  posts: [Post]\n}";
        let input = GenerationInput::new("blog").with_schema(schema);
        let config = CodegenConfig::default();
        let printed = print_item(&ModuleGenerator::new(&input, &config).schema_constant());
        assert_eq!(
            printed,
            format!("pub const SCHEMA: &str = r##\"{schema}\"##;\n")
        );
    }

    #[test]
    fn test_header_toggle() {
        let input = GenerationInput::new("blog");
        let config = CodegenConfig::default();
        assert_eq!(
            ModuleGenerator::new(&input, &config).header(),
            vec![GENERATED_HEADER.to_string()]
        );
        let config = CodegenConfig::new().header(false);
        assert!(ModuleGenerator::new(&input, &config).header().is_empty());
    }
}
