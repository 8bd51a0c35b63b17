//! Satisfies table generation.
//!
//! Each object gets a static list of the schema type names its values match:
//! its own name first, then the interfaces and unions it belongs to. The
//! runtime's field collection reads it to decide which fragments apply.

use resolvgen_schema::{GenerationInput, Object};

use crate::ast::{Expr, Item};

/// Generator for satisfies tables.
pub struct SatisfiesGenerator<'a> {
    input: &'a GenerationInput,
}

impl<'a> SatisfiesGenerator<'a> {
    /// Creates a new satisfies table generator.
    #[must_use]
    pub fn new(input: &'a GenerationInput) -> Self {
        Self { input }
    }

    /// Generates one static table per object, in object order.
    #[must_use]
    pub fn generate(&self) -> Vec<Item> {
        self.input.objects.iter().map(satisfies_table).collect()
    }
}

/// Builds the satisfies table for one object.
#[must_use]
pub fn satisfies_table(object: &Object) -> Item {
    Item::Static {
        name: object.ty.satisfies_name(),
        ty: "&[&str]".to_string(),
        value: Expr::Slice(
            object
                .satisfies_table()
                .into_iter()
                .map(|name| Expr::Str(name.to_string()))
                .collect(),
        ),
    }
}
