//! Decoding of a matched JSON-LD block into a [`ParsedRecipe`].
//!
//! schema.org lets most properties appear as a bare literal, a single object,
//! or an array of either. Each field is collapsed by a small pure normalizer
//! picked for that field's declared shape, so the output record never holds
//! mixed shapes. A field absent from the source (or explicitly `null`)
//! decodes to `None`; only a present value matching none of the accepted
//! shapes is an error.

use html_escape::decode_html_entities;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{json_type_name, ScrapeError};
use crate::model::{InstructionStep, ParsedRecipe};

/// Instruction step as it appears in JSON-LD (`HowToStep` and friends).
/// The step's `url` becomes the canonical `image` field.
#[derive(Debug, Deserialize)]
struct RawStep {
    text: Option<String>,
    name: Option<String>,
    #[serde(rename = "url")]
    image: Option<String>,
}

/// Decode a standalone recipe JSON block into the canonical record.
pub fn decode_recipe(json: &str) -> Result<ParsedRecipe, ScrapeError> {
    let block: Value =
        serde_json::from_str(json).map_err(|e| ScrapeError::StructuralDecode(e.to_string()))?;
    let fields = block.as_object().ok_or_else(|| {
        ScrapeError::StructuralDecode(format!(
            "expected a JSON object, found {}",
            json_type_name(&block)
        ))
    })?;

    Ok(ParsedRecipe {
        name: field(fields, "name")
            .map(|v| scalar_string("name", v))
            .transpose()?
            .map(|s| decode_html_symbols(&s)),
        images: field(fields, "image")
            .map(|v| image_list("image", v))
            .transpose()?,
        recipe_yield: field(fields, "recipeYield")
            .map(|v| string_list("recipeYield", v))
            .transpose()?,
        author: field(fields, "author")
            .and_then(|v| nested_or_scalar("author", "name", v).transpose())
            .transpose()?,
        description: field(fields, "description")
            .and_then(|v| nested_or_scalar("description", "description", v).transpose())
            .transpose()?,
        total_time: field(fields, "totalTime")
            .map(|v| scalar_string("totalTime", v))
            .transpose()?,
        prep_time: field(fields, "prepTime")
            .map(|v| scalar_string("prepTime", v))
            .transpose()?,
        cook_time: field(fields, "cookTime")
            .map(|v| scalar_string("cookTime", v))
            .transpose()?,
        instructions: field(fields, "recipeInstructions")
            .map(|v| instruction_steps("recipeInstructions", v))
            .transpose()?,
        ingredients: field(fields, "recipeIngredient")
            .map(|v| string_list("recipeIngredient", v))
            .transpose()?,
    })
}

/// Look up a field, treating JSON `null` the same as an absent key.
fn field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

fn decode_html_symbols(text: &str) -> String {
    // for some reason need to decode twice to get the correct string
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

fn scalar_string(name: &'static str, value: &Value) -> Result<String, ScrapeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(ScrapeError::field_shape(name, "a string", other)),
    }
}

/// Scalar-or-array-of-scalar: a bare string becomes a one-element list,
/// arrays must be all-string. Order and duplicates are preserved.
fn string_list(name: &'static str, value: &Value) -> Result<Vec<String>, ScrapeError> {
    match value {
        Value::String(s) => Ok(vec![decode_html_symbols(s)]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(decode_html_symbols(s)),
                other => Err(ScrapeError::field_shape(name, "an array of strings", other)),
            })
            .collect(),
        other => Err(ScrapeError::field_shape(
            name,
            "a string or an array of strings",
            other,
        )),
    }
}

/// Scalar-or-nested-object: a bare string is used directly, an object
/// contributes the given sub-key. An object without the sub-key decodes to
/// absent; a sub-key of the wrong type does not.
fn nested_or_scalar(
    name: &'static str,
    key: &str,
    value: &Value,
) -> Result<Option<String>, ScrapeError> {
    match value {
        Value::String(s) => Ok(Some(decode_html_symbols(s))),
        Value::Object(map) => match map.get(key) {
            Some(Value::String(s)) => Ok(Some(decode_html_symbols(s))),
            Some(other) => Err(ScrapeError::field_shape(name, "a string value", other)),
            None => Ok(None),
        },
        other => Err(ScrapeError::field_shape(
            name,
            "a string or a nested object",
            other,
        )),
    }
}

/// Array-of-nested-objects: entries are bare URL strings or objects exposing
/// a `url` key, singly or in an array, mixed freely.
fn image_list(name: &'static str, value: &Value) -> Result<Vec<String>, ScrapeError> {
    match value {
        Value::Array(items) => items.iter().map(|item| image_entry(name, item)).collect(),
        single => image_entry(name, single).map(|url| vec![url]),
    }
}

fn image_entry(name: &'static str, value: &Value) -> Result<String, ScrapeError> {
    match value {
        Value::String(url) => Ok(url.clone()),
        Value::Object(map) => match map.get("url") {
            Some(Value::String(url)) => Ok(url.clone()),
            _ => Err(ScrapeError::field_shape(
                name,
                "an object with a `url` string",
                value,
            )),
        },
        other => Err(ScrapeError::field_shape(
            name,
            "a string or an image object",
            other,
        )),
    }
}

/// Adaptive step sequence: a bare string (text-only step), a single step
/// object, or an array mixing both, preserved in source order.
fn instruction_steps(
    name: &'static str,
    value: &Value,
) -> Result<Vec<InstructionStep>, ScrapeError> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| instruction_entry(name, item))
            .collect(),
        single => instruction_entry(name, single).map(|step| vec![step]),
    }
}

fn instruction_entry(name: &'static str, value: &Value) -> Result<InstructionStep, ScrapeError> {
    match value {
        Value::String(text) => Ok(InstructionStep::from_text(decode_html_symbols(text))),
        Value::Object(_) => {
            let raw: RawStep = serde_json::from_value(value.clone())
                .map_err(|e| ScrapeError::FieldShape {
                    field: name,
                    detail: e.to_string(),
                })?;
            Ok(InstructionStep::new(
                raw.text.map(|text| decode_html_symbols(&text)),
                raw.name.map(|step_name| decode_html_symbols(&step_name)),
                raw.image,
            ))
        }
        other => Err(ScrapeError::field_shape(
            name,
            "a string or a step object",
            other,
        )),
    }
}
