//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use resolvgen::prelude::*;
//! ```

// Model types
pub use resolvgen_schema::{
    Arg, Field, FieldSource, GenerationInput, Import, Modifier, Object, ROOT_TYPE_NAME, Type,
};
pub use resolvgen_schema::{LoadError, ModelError};
pub use resolvgen_schema::{load_input_file, load_input_json, validate_input};

// Generation
pub use resolvgen_codegen::{
    CodegenConfig, CodegenError, Generator, generate, generate_from_file, generate_from_json,
};
