use serde::Serialize;

/// A recipe normalized out of schema.org JSON-LD.
///
/// Every field is independently optional: pages routinely omit metadata, and
/// an absent field is a valid state, not an error. Fields never hold mixed
/// shapes once decoded — scalar variance in the source collapses to a single
/// string, array variance to an ordered `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedRecipe {
    pub name: Option<String>,
    pub images: Option<Vec<String>>,
    pub recipe_yield: Option<Vec<String>>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub total_time: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub instructions: Option<Vec<InstructionStep>>,
    pub ingredients: Option<Vec<String>>,
}

/// A single instruction step.
///
/// `image` is sourced from the step object's `url` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionStep {
    pub text: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl InstructionStep {
    pub fn new(text: Option<String>, name: Option<String>, image: Option<String>) -> Self {
        Self { text, name, image }
    }

    /// A step carrying only instruction text, as produced from a bare string.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            name: None,
            image: None,
        }
    }
}
