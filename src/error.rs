use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while scraping a recipe page.
///
/// Every variant is terminal: each stage of the pipeline fails fast, and no
/// stage substitutes a default for a structurally invalid value.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The page could not be fetched (bad URL, connectivity, non-success status)
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// An ld+json script block did not hold parseable JSON-LD
    #[error("Invalid JSON in ld+json block: {0}")]
    JsonSyntax(String),

    /// Every script block parsed, but none declared type Recipe
    #[error("No recipe metadata found in page")]
    NoRecipeMetadata,

    /// A present field's value matched none of the shapes accepted for it
    #[error("Field `{field}` has an unsupported shape: {detail}")]
    FieldShape {
        field: &'static str,
        detail: String,
    },

    /// The matched block could not be decoded as a recipe object
    #[error("Failed to decode recipe block: {0}")]
    StructuralDecode(String),
}

impl ScrapeError {
    pub(crate) fn field_shape(field: &'static str, expected: &str, found: &Value) -> Self {
        ScrapeError::FieldShape {
            field,
            detail: format!("expected {expected}, found {}", json_type_name(found)),
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
