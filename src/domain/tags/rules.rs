//! Rule tables shared by the normalizer and the repair pass

use super::compound::CompoundTable;
use crate::error::{Result, ShelftagError};
use std::collections::{BTreeMap, HashSet};

/// Compound terms that ship with shelftag, longest first where they overlap.
pub const DEFAULT_COMPOUND_TERMS: &[&str] = &[
    "Non-Fiction",
    "Self-Help",
    "Sci-Fi",
    "Science Fiction",
    "Historical Fiction",
    "Literary Fiction",
    "Short Stories",
    "Social Issues",
    "Food Ethics",
    "Color Theory",
    "Creative Philosophy",
    "Chinese Philosophy",
    "Human Computer Interaction",
    "Computer Interaction",
    "Fictional Memoir",
    "Visual Anthology",
];

const DEFAULT_OVERRIDES: &[(&str, &str)] = &[
    ("Photography / Art", "Art"),
    ("Photography/Art", "Art"),
    ("Photography - Art", "Art"),
    ("Photography-Art", "Art"),
];

const DEFAULT_RENAMES: &[(&str, &str)] = &[("Photography", "Art")];

/// Validated, immutable rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRules {
    compounds: CompoundTable,
    overrides: BTreeMap<String, Vec<String>>,
    renames: BTreeMap<String, String>,
}

impl Default for TagRules {
    fn default() -> Self {
        TagRules {
            compounds: CompoundTable::new(DEFAULT_COMPOUND_TERMS.iter().copied()),
            overrides: DEFAULT_OVERRIDES
                .iter()
                .map(|(from, to)| (from.to_string(), vec![to.to_string()]))
                .collect(),
            renames: DEFAULT_RENAMES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

impl TagRules {
    /// Build a rule set, rejecting tables that would break the tag invariants
    /// or make `repair` non-idempotent.
    pub fn new(
        compound_terms: Vec<String>,
        overrides: BTreeMap<String, Vec<String>>,
        renames: BTreeMap<String, String>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for phrase in &compound_terms {
            require_tag("Compound term", phrase)?;
            if !seen.insert(phrase.as_str()) {
                return Err(ShelftagError::Config(format!(
                    "Duplicate compound term: '{}'",
                    phrase
                )));
            }
        }

        for (genre, tags) in &overrides {
            require_tag("Override key", genre)?;
            if tags.is_empty() {
                return Err(ShelftagError::Config(format!(
                    "Override for '{}' must list at least one tag",
                    genre
                )));
            }
            for tag in tags {
                require_tag("Override tag", tag)?;
            }
        }

        for (from, to) in &renames {
            require_tag("Rename source", from)?;
            require_tag("Rename target", to)?;
            if let Some(next) = renames.get(to) {
                return Err(ShelftagError::Config(format!(
                    "Rename chain: {} -> {} -> {}",
                    from, to, next
                )));
            }
            if seen.contains(from.as_str()) {
                return Err(ShelftagError::Config(format!(
                    "Rename source '{}' is also a compound term",
                    from
                )));
            }
        }

        Ok(TagRules {
            compounds: CompoundTable::new(compound_terms),
            overrides,
            renames,
        })
    }

    pub fn compounds(&self) -> &CompoundTable {
        &self.compounds
    }

    pub fn overrides(&self) -> &BTreeMap<String, Vec<String>> {
        &self.overrides
    }

    pub fn renames(&self) -> &BTreeMap<String, String> {
        &self.renames
    }

    pub fn override_for(&self, genre: &str) -> Option<&[String]> {
        self.overrides.get(genre).map(Vec::as_slice)
    }

    /// Replacement for a stray token, or the token itself.
    pub fn rename<'a>(&'a self, tag: &'a str) -> &'a str {
        self.renames.get(tag).map(String::as_str).unwrap_or(tag)
    }
}

fn require_tag(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShelftagError::Config(format!("{} must not be empty", what)));
    }
    if value.trim() != value {
        return Err(ShelftagError::Config(format!(
            "{} '{}' has leading or trailing whitespace",
            what, value
        )));
    }
    Ok(())
}
