//! # resolvgen codegen
//!
//! Rust code generation from a resolved object/field model.
//!
//! This crate provides:
//! - Resolver trait synthesis for fields without a binding
//! - Satisfies tables for fragment matching
//! - Per-object field dispatchers with error-skip and fatal-abort paths
//! - Type-directed value serialization over arbitrary modifier stacks
//! - An emission tree and its pretty-printer

pub mod ast;
pub mod config;
pub mod error;
pub mod generator;
pub mod printer;
pub mod rust;

pub use config::CodegenConfig;
pub use error::CodegenError;
pub use generator::Generator;

use resolvgen_schema::GenerationInput;

/// Generates Rust code for a generation input with the default configuration.
///
/// # Errors
/// Returns `CodegenError` if the input fails validation.
pub fn generate(input: &GenerationInput) -> Result<String, CodegenError> {
    Ok(Generator::new(input)?.generate())
}

/// Generates Rust code from a JSON-encoded generation input.
///
/// # Arguments
/// * `json` - Serialized `GenerationInput`
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if decoding, validation or generation fails.
pub fn generate_from_json(json: &str) -> Result<String, CodegenError> {
    let input = resolvgen_schema::load_input_json(json)?;
    generate(&input)
}

/// Generates Rust code from a JSON-encoded generation input file.
///
/// # Errors
/// Returns `CodegenError` if reading, decoding, validation or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let input = resolvgen_schema::load_input_file(path)?;
    generate(&input)
}
