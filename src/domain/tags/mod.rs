//! Tag system

pub mod compound;
pub mod normalizer;
pub mod repair;
pub mod rules;

// Re-export main types
pub use compound::{CompoundTable, CompoundTerm};
pub use normalizer::normalize_genre;
pub use repair::{dedup_preserving_order, repair_tags};
pub use rules::{TagRules, DEFAULT_COMPOUND_TERMS};

impl TagRules {
    /// Convert a raw genre string into tags with these rules.
    pub fn normalize<'a>(&self, genre: impl Into<Option<&'a str>>) -> Vec<String> {
        normalize_genre(genre, self)
    }

    /// Repair a previously split tag list with these rules.
    pub fn repair(&self, tags: &[String]) -> Vec<String> {
        repair_tags(tags, self)
    }
}
