//! # resolvgen
//!
//! Schema-first GraphQL execution code generation for Rust.
//!
//! Given the resolved object model of a schema, resolvgen emits one Rust
//! module holding everything the runtime needs to execute queries against it.
//!
//! ## Features
//!
//! - **Resolver trait** - One method per field the user must implement
//! - **Field dispatchers** - Per-object functions mapping selections to values
//! - **Modifier-aware serialization** - Any nesting of optional and list
//! - **Polymorphic dispatch** - Interfaces and unions routed by enum variant
//! - **Validated input** - Structural model errors reported before emission
//!
//! ## Quick Start
//!
//! ```ignore
//! use resolvgen::prelude::*;
//!
//! let input = load_input_file(Path::new("schema.json"))?;
//! let generator = Generator::with_config(&input, CodegenConfig::new().resolver_trait("BlogResolvers"))?;
//! generator.write_to_file(Path::new("src/generated/blog.rs"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Object/field/type model, JSON loading and validation
//! - [`codegen`] - Rust code generation from the model

pub mod prelude;

/// Object model, loading and validation.
pub mod schema {
    pub use resolvgen_schema::*;
}

/// Code generation from the object model.
pub mod codegen {
    pub use resolvgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use resolvgen_codegen::{
    CodegenConfig, CodegenError, Generator, generate, generate_from_file, generate_from_json,
};
pub use resolvgen_schema::{GenerationInput, ModelError};
