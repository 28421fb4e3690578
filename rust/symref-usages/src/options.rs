//! Session configuration.

use serde::{Deserialize, Serialize};
use symref_common::{Result, error::Error, verify_arg};

pub const DEFAULT_REFERENCES_FIELD: &str = "references";
pub const DEFAULT_PACKAGE_FIELD: &str = "packageName";
pub const DEFAULT_REFERENCES_CASE_INSENSITIVE_FIELD: &str = "referencesCaseInsensitive";

/// Names of the index fields the usage queries read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct IndexFields {
    /// Field holding one encoded term per referenced symbol.
    pub references: String,
    /// Field holding the package name of the document.
    pub package_name: String,
    /// Lowercased copy of the references field, read by case-insensitive
    /// pattern kinds.
    pub references_case_insensitive: String,
}

impl Default for IndexFields {
    fn default() -> Self {
        IndexFields {
            references: DEFAULT_REFERENCES_FIELD.to_string(),
            package_name: DEFAULT_PACKAGE_FIELD.to_string(),
            references_case_insensitive: DEFAULT_REFERENCES_CASE_INSENSITIVE_FIELD.to_string(),
        }
    }
}

/// Options of a [`UsagesSession`](crate::UsagesSession).
///
/// ```json
/// {
///   "fields": {
///     "references": "references",
///     "packageName": "packageName",
///     "referencesCaseInsensitive": "referencesCaseInsensitive"
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionOptions {
    pub fields: IndexFields,
}

impl SessionOptions {
    pub fn with_references_field(mut self, field: impl Into<String>) -> Self {
        self.fields.references = field.into();
        self
    }

    pub fn with_package_field(mut self, field: impl Into<String>) -> Self {
        self.fields.package_name = field.into();
        self
    }

    /// Parses options from JSON; absent entries keep their defaults.
    pub fn from_json(json: &str) -> Result<SessionOptions> {
        let options: SessionOptions = serde_json::from_str(json)
            .map_err(|e| Error::invalid_format("session options", e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = &self.fields;
        verify_arg!(references, !fields.references.is_empty());
        verify_arg!(package_name, !fields.package_name.is_empty());
        verify_arg!(
            references_case_insensitive,
            !fields.references_case_insensitive.is_empty()
        );
        verify_arg!(fields, fields.references != fields.package_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SessionOptions::default();
        assert_eq!(options.fields.references, "references");
        assert_eq!(options.fields.package_name, "packageName");
        assert_eq!(
            options.fields.references_case_insensitive,
            "referencesCaseInsensitive"
        );
        options.validate().unwrap();
    }

    #[test]
    fn test_from_json_keeps_missing_defaults() {
        let json = r#"{ "fields": { "packageName": "pkg" } }"#;
        let options = SessionOptions::from_json(json).unwrap();
        assert_eq!(options.fields.references, "references");
        assert_eq!(options.fields.package_name, "pkg");
        assert_eq!(SessionOptions::from_json("{}").unwrap(), SessionOptions::default());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(SessionOptions::from_json(r#"{ "field": {} }"#).is_err());
        assert!(SessionOptions::from_json("not json").is_err());
        let err = SessionOptions::from_json(r#"{ "fields": { "packageName": "references" } }"#)
            .unwrap_err();
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_builders() {
        let options = SessionOptions::default()
            .with_references_field("refs")
            .with_package_field("pkg");
        assert_eq!(options.fields.references, "refs");
        assert_eq!(options.fields.package_name, "pkg");
        assert!(
            SessionOptions::default()
                .with_package_field("")
                .validate()
                .is_err()
        );
    }
}
