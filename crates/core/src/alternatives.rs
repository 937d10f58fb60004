use crate::config::AlternativeEntry;
use tracing::warn;

/// Ordered keyword -> substitutes mapping. Iteration order is insertion order.
/// Keywords are lower-case so they can match a lower-cased item name.
#[derive(Debug, Clone)]
pub struct AlternativeCatalog {
    entries: Vec<(String, Vec<String>)>,
}

impl AlternativeCatalog {
    /// Built-in entries followed by configured ones. Configured keywords are
    /// trimmed and lower-cased; a blank keyword would match every name, so
    /// such entries are skipped.
    pub fn with_extra(extra: &[AlternativeEntry]) -> Self {
        let mut entries = builtin();
        for entry in extra {
            let keyword = entry.keyword.trim().to_lowercase();
            if keyword.is_empty() {
                warn!(
                    substitutes = ?entry.substitutes,
                    "ignoring configured alternative with an empty keyword"
                );
                continue;
            }
            entries.push((keyword, entry.substitutes.clone()));
        }
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(keyword, subs)| (keyword.as_str(), subs.as_slice()))
    }
}

impl Default for AlternativeCatalog {
    fn default() -> Self {
        Self {
            entries: builtin(),
        }
    }
}

fn builtin() -> Vec<(String, Vec<String>)> {
    let owned = |subs: &[&str]| subs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        (
            "couscous".to_string(),
            owned(&["quinoa", "rice", "corn couscous"]),
        ),
        ("bread".to_string(), owned(&["corn bread", "rice bread"])),
        ("flour".to_string(), owned(&["rice flour", "corn flour"])),
    ]
}
