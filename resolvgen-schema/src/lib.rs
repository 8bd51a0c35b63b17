//! # resolvgen schema
//!
//! Resolved object/field/type model consumed by the resolvgen generator.
//!
//! This crate provides:
//! - Type occurrences with ordered optional/list modifiers
//! - Objects, fields and the three field sources (bound, delegated, abstract)
//! - The complete generation input (module name, imports, schema text)
//! - Structural validation of the model
//! - JSON loading of extractor output

pub mod error;
pub mod ir;
pub mod loader;
pub mod objects;
pub mod types;
pub mod validation;

pub use error::{LoadError, ModelError};
pub use ir::{GenerationInput, Import};
pub use loader::{load_input_file, load_input_json};
pub use objects::{Arg, Field, FieldSource, Object};
pub use types::{Modifier, ROOT_TYPE_NAME, Type};
pub use validation::validate_input;
