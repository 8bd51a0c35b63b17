//! Generation input loading.
//!
//! The extractor hands its output over as JSON. Field names follow the model
//! structs; optional collections may be omitted.

use std::path::Path;

use crate::error::LoadError;
use crate::ir::GenerationInput;

/// Loads a generation input from a JSON string.
///
/// # Arguments
/// * `json` - Serialized `GenerationInput`
///
/// # Errors
/// Returns `LoadError` if the JSON is malformed or does not match the model.
pub fn load_input_json(json: &str) -> Result<GenerationInput, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a generation input from a JSON file.
///
/// # Errors
/// Returns `LoadError` if reading or decoding fails.
pub fn load_input_file(path: &Path) -> Result<GenerationInput, LoadError> {
    let json = std::fs::read_to_string(path)?;
    load_input_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::FieldSource;
    use crate::types::Modifier;
    use std::io::Write;

    const BLOG: &str = r#"{
        "package": "blog",
        "imports": [{"alias": "models", "path": "crate::models"}],
        "objects": [
            {
                "name": "Post",
                "type": {"name": "models::Post", "graphql_name": "Post"},
                "satisfies": ["Node"],
                "fields": [
                    {
                        "graphql_name": "title",
                        "var_name": "it.title",
                        "type": {"name": "String", "graphql_name": "String", "basic": true}
                    },
                    {
                        "graphql_name": "author",
                        "type": {
                            "name": "models::User",
                            "graphql_name": "User",
                            "modifiers": ["optional"]
                        }
                    }
                ]
            }
        ],
        "schema_raw": "type Post { title: String! author: User }"
    }"#;

    #[test]
    fn test_load_input_json() {
        let input = load_input_json(BLOG).expect("Failed to load");
        assert_eq!(input.package, "blog");
        assert_eq!(input.objects.len(), 1);

        let post = &input.objects[0];
        assert_eq!(post.satisfies, vec!["Node".to_string()]);
        assert_eq!(post.fields[0].source(), FieldSource::Bound("it.title"));
        assert_eq!(post.fields[1].source(), FieldSource::Abstract);
        assert_eq!(post.fields[1].ty.modifiers, vec![Modifier::Optional]);
    }

    #[test]
    fn test_load_input_json_malformed() {
        let result = load_input_json(r#"{"package": 3}"#);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_load_input_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(BLOG.as_bytes()).expect("Failed to write");

        let input = load_input_file(file.path()).expect("Failed to load");
        assert_eq!(input.objects[0].name, "Post");
    }

    #[test]
    fn test_load_input_file_missing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = load_input_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
