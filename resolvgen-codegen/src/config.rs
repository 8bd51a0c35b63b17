//! Generator configuration.

use crate::error::CodegenError;

/// Default path of the runtime crate the generated code imports from.
pub const DEFAULT_RUNTIME_PATH: &str = "resolvgen_runtime";

/// Default name of the synthesized resolver trait.
pub const DEFAULT_RESOLVER_TRAIT: &str = "Resolvers";

/// Names the generated module imports from the runtime.
pub const RUNTIME_PRELUDE: [&str; 6] = [
    "Context",
    "Error",
    "ExecutionContext",
    "Map",
    "Selection",
    "Value",
];

/// Settings that shape the generated module without changing its semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    runtime_path: String,
    resolver_trait: String,
    header: bool,
}

impl CodegenConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            resolver_trait: DEFAULT_RESOLVER_TRAIT.to_string(),
            header: true,
        }
    }

    /// Sets the runtime crate path.
    #[must_use]
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Sets the resolver trait name.
    #[must_use]
    pub fn resolver_trait(mut self, name: impl Into<String>) -> Self {
        self.resolver_trait = name.into();
        self
    }

    /// Enables or disables the "generated, do not edit" header.
    #[must_use]
    pub fn header(mut self, enabled: bool) -> Self {
        self.header = enabled;
        self
    }

    /// Returns the runtime crate path.
    #[must_use]
    pub fn runtime(&self) -> &str {
        &self.runtime_path
    }

    /// Returns the resolver trait name.
    #[must_use]
    pub fn trait_name(&self) -> &str {
        &self.resolver_trait
    }

    /// Returns true if the header comment is emitted.
    #[must_use]
    pub const fn has_header(&self) -> bool {
        self.header
    }

    /// Checks that the configured names are valid Rust.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` naming the offending setting.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if syn::parse_str::<syn::Path>(&self.runtime_path).is_err() {
            return Err(CodegenError::generation(format!(
                "runtime path '{}' is not a Rust path",
                self.runtime_path
            )));
        }
        if syn::parse_str::<syn::Ident>(&self.resolver_trait).is_err() {
            return Err(CodegenError::generation(format!(
                "resolver trait name '{}' is not a Rust identifier",
                self.resolver_trait
            )));
        }
        Ok(())
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self::new()
    }
}
