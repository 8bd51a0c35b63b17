//! Rust code generation modules.

pub mod dispatcher;
pub mod module;
pub mod resolvers;
pub mod satisfies;
pub mod serializer;

pub use dispatcher::DispatcherGenerator;
pub use module::ModuleGenerator;
pub use resolvers::ResolverTraitGenerator;
pub use satisfies::SatisfiesGenerator;
pub use serializer::{DispatchTable, ScalarKind, ValueSerializer};
