use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::{json_type_name, ScrapeError};

/// Outcome of sniffing a single ld+json block.
enum BlockSniff {
    /// The block (or one of its `@graph` entries) is typed Recipe;
    /// holds the standalone JSON text for that entity.
    Match(String),
    /// Well-formed JSON-LD describing something else.
    NoMatch,
}

/// Find the JSON text of the first schema.org Recipe entity in a document.
///
/// Scans `script[type="application/ld+json"]` elements in document order.
/// A block matches when its `@type` equals `"recipe"` case-insensitively,
/// either at the top level or on an entry of a top-level `@graph` array
/// (one level only). A graph entry match is re-serialized standalone, so the
/// caller never sees the wrapper or its sibling entities.
///
/// First match wins: on multi-block pages a later, richer Recipe block is
/// never preferred over an earlier one.
pub fn locate_recipe_block(document: &Html) -> Result<String, ScrapeError> {
    let selector = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();

    for script in document.select(&selector) {
        let raw = script.inner_html();
        match sniff_block(raw.trim())? {
            BlockSniff::Match(json) => {
                debug!("Matched recipe block: {json}");
                return Ok(json);
            }
            BlockSniff::NoMatch => continue,
        }
    }

    Err(ScrapeError::NoRecipeMetadata)
}

/// Try the accepted JSON-LD shapes against one block, in order: a typed
/// entity, then a `@graph` wrapper. A block that is not valid JSON, or whose
/// top level is not an object, fits neither shape and aborts the whole scan —
/// a syntax defect in an ld+json block is worth surfacing distinctly from
/// "nothing found".
fn sniff_block(raw: &str) -> Result<BlockSniff, ScrapeError> {
    let block: Value =
        serde_json::from_str(raw).map_err(|e| ScrapeError::JsonSyntax(e.to_string()))?;

    if !block.is_object() {
        return Err(ScrapeError::JsonSyntax(format!(
            "expected a JSON-LD object, found {}",
            json_type_name(&block)
        )));
    }

    if is_recipe_typed(&block) {
        return Ok(BlockSniff::Match(raw.to_owned()));
    }

    if let Some(entries) = block.get("@graph").and_then(Value::as_array) {
        if let Some(entry) = entries.iter().find(|entry| is_recipe_typed(entry)) {
            // Serialize the entry alone, dropping the wrapper and its siblings
            return Ok(BlockSniff::Match(entry.to_string()));
        }
    }

    Ok(BlockSniff::NoMatch)
}

fn is_recipe_typed(entity: &Value) -> bool {
    entity
        .get("@type")
        .and_then(Value::as_str)
        .is_some_and(|kind| kind.eq_ignore_ascii_case("recipe"))
}
