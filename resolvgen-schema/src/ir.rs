//! Generation input handed over by the extractor.
//!
//! This module holds the complete, resolved description of one generated
//! module plus the naming helpers shared by the model and the generator.

use serde::{Deserialize, Serialize};

use crate::objects::Object;

/// External dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Local alias the generated code refers to.
    pub alias: String,
    /// Fully qualified module path.
    pub path: String,
}

impl Import {
    /// Creates a new import.
    #[must_use]
    pub fn new(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            path: path.into(),
        }
    }

    /// Returns true if the alias equals the last path segment.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.path.rsplit("::").next() == Some(self.alias.as_str())
    }
}

/// Everything needed to generate one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationInput {
    /// Name of the generated module.
    pub package: String,
    /// Dependencies in declaration order.
    #[serde(default)]
    pub imports: Vec<Import>,
    /// Objects in declaration order.
    #[serde(default)]
    pub objects: Vec<Object>,
    /// Original schema text, embedded verbatim.
    #[serde(default)]
    pub schema_raw: String,
}

impl GenerationInput {
    /// Creates an empty input for the given module name.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: Vec::new(),
            objects: Vec::new(),
            schema_raw: String::new(),
        }
    }

    /// Appends an import.
    #[must_use]
    pub fn with_import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Appends an object.
    #[must_use]
    pub fn with_object(mut self, object: Object) -> Self {
        self.objects.push(object);
        self
    }

    /// Sets the raw schema text.
    #[must_use]
    pub fn with_schema(mut self, schema_raw: impl Into<String>) -> Self {
        self.schema_raw = schema_raw.into();
        self
    }

    /// Returns the number of resolver trait methods this input requires.
    #[must_use]
    pub fn abstract_field_count(&self) -> usize {
        self.objects.iter().map(|o| o.abstract_fields().count()).sum()
    }
}

/// Converts a string to snake_case.
///
/// Acronym runs stay together: `avatarURL` becomes `avatar_url` and `ID`
/// becomes `id`.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Converts a string to SCREAMING_SNAKE_CASE.
#[must_use]
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Returns `name` as a Rust identifier, raw-escaped if it is a keyword.
///
/// The result is not guaranteed to be valid: names that are neither plain
/// nor raw identifiers (`self`, `my name`) are returned escaped and are
/// rejected by validation.
#[must_use]
pub fn escape_keyword(name: &str) -> String {
    if syn::parse_str::<syn::Ident>(name).is_ok() {
        name.to_string()
    } else {
        format!("r#{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Field, Object};
    use crate::types::Type;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("clOrdId"), "cl_ord_id");
        assert_eq!(to_snake_case("title"), "title");
        assert_eq!(to_snake_case("MDEntryPx"), "md_entry_px");
        assert_eq!(to_snake_case("ID"), "id");
        assert_eq!(to_snake_case("avatarURL"), "avatar_url");
        assert_eq!(to_snake_case("UserProfile"), "user_profile");
        assert_eq!(to_snake_case("created-at"), "created_at");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("sha256Hash"), "sha256_hash");
    }

    #[test]
    fn test_to_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("Post"), "POST");
        assert_eq!(to_screaming_snake_case("UserProfile"), "USER_PROFILE");
    }

    #[test]
    fn test_escape_keyword() {
        assert_eq!(escape_keyword("first"), "first");
        assert_eq!(escape_keyword("type"), "r#type");
        assert_eq!(escape_keyword("in"), "r#in");
        assert!(syn::parse_str::<syn::Ident>(&escape_keyword("where")).is_ok());
        assert!(syn::parse_str::<syn::Ident>(&escape_keyword("self")).is_err());
    }

    #[test]
    fn test_import_is_plain() {
        assert!(Import::new("models", "crate::models").is_plain());
        assert!(Import::new("chrono", "chrono").is_plain());
        assert!(!Import::new("m", "crate::models").is_plain());
    }

    #[test]
    fn test_generation_input_builders() {
        let input = GenerationInput::new("blog")
            .with_import(Import::new("models", "crate::models"))
            .with_object(
                Object::new("Post", Type::object("Post", "Post"))
                    .with_field(Field::resolved("author", Type::object("User", "User"))),
            )
            .with_object(Object::new("Query", Type::root("Query")))
            .with_schema("type Query { posts: [Post] }");

        assert_eq!(input.package, "blog");
        assert_eq!(input.imports.len(), 1);
        assert_eq!(input.objects[0].name, "Post");
        assert!(input.objects[1].is_root());
        assert_eq!(input.abstract_field_count(), 1);
    }

    #[test]
    fn test_imports_keep_declaration_order() {
        let json = r#"{
            "package": "blog",
            "imports": [
                {"alias": "zeta", "path": "crate::zeta"},
                {"alias": "alpha", "path": "crate::alpha"}
            ]
        }"#;
        let input: GenerationInput = serde_json::from_str(json).expect("Failed to parse");
        let aliases: Vec<_> = input.imports.iter().map(|i| i.alias.as_str()).collect();
        assert_eq!(aliases, vec!["zeta", "alpha"]);
        assert!(input.objects.is_empty());
        assert!(input.schema_raw.is_empty());
    }
}
