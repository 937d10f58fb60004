use crate::lexicon::GlutenLexicon;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub contains_gluten: bool,
    /// Lexicon tokens in ingredient order, duplicates kept.
    pub sources: Vec<String>,
}

/// Splits `ingredients` on whitespace and keeps every token that is a
/// lexicon member. Whole tokens only: "wheat-free" does not match "wheat".
pub fn classify(ingredients: &str, lexicon: &GlutenLexicon) -> Classification {
    let sources: Vec<String> = ingredients
        .split_whitespace()
        .filter(|token| lexicon.contains(token))
        .map(str::to_string)
        .collect();
    Classification {
        contains_gluten: !sources.is_empty(),
        sources,
    }
}
