use std::collections::HashSet;

/// Built-in gluten-bearing tokens, Latin and Arabic script.
const BASE_TOKENS: &[&str] = &[
    "wheat", "barley", "rye", "couscous", "semolina", "bulgur", "فريكة", "قمح", "شعير",
];

/// Immutable set of gluten-bearing ingredient tokens. Membership is exact,
/// case-sensitive string equality.
#[derive(Debug, Clone)]
pub struct GlutenLexicon {
    tokens: HashSet<String>,
}

impl GlutenLexicon {
    fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in tokens plus any extras from configuration.
    pub fn with_extra(extra: &[String]) -> Self {
        Self::new(
            BASE_TOKENS
                .iter()
                .map(|t| t.to_string())
                .chain(extra.iter().cloned()),
        )
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

impl Default for GlutenLexicon {
    fn default() -> Self {
        Self::with_extra(&[])
    }
}
