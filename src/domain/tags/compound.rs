//! Compound terms: multi-word tags that must never be split.

/// A phrase that is always kept as a single tag.
///
/// `words` is derived from `phrase` by splitting on whitespace and hyphens, so
/// `"Non-Fiction"` is repaired from the adjacent tags `["Non", "Fiction"]` and
/// `"Human Computer Interaction"` from its three words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundTerm {
    phrase: String,
    words: Vec<String>,
}

impl CompoundTerm {
    pub fn new(phrase: impl Into<String>) -> Self {
        let phrase = phrase.into();
        let words = phrase
            .split(|ch: char| ch.is_whitespace() || ch == '-')
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();
        CompoundTerm { phrase, words }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether `tokens` spell out this term word by word.
    pub fn matches_words(&self, tokens: &[String]) -> bool {
        self.words.len() == tokens.len() && self.words.iter().zip(tokens).all(|(w, t)| w == t)
    }
}

/// Ordered compound-term table. Declaration order decides which term is
/// protected first when two terms overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundTable {
    terms: Vec<CompoundTerm>,
}

impl CompoundTable {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CompoundTable {
            terms: phrases.into_iter().map(CompoundTerm::new).collect(),
        }
    }

    pub fn terms(&self) -> &[CompoundTerm] {
        &self.terms
    }

    pub fn get(&self, index: usize) -> Option<&CompoundTerm> {
        self.terms.get(index)
    }

    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.terms.iter().any(|term| term.phrase == phrase)
    }

    /// Longest word decomposition in the table (0 for an empty table).
    pub fn max_words(&self) -> usize {
        self.terms.iter().map(|t| t.words.len()).max().unwrap_or(0)
    }

    /// First term, in declaration order, whose words equal `tokens`.
    pub fn find_by_words(&self, tokens: &[String]) -> Option<&CompoundTerm> {
        self.terms.iter().find(|term| term.matches_words(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn words_split_on_spaces_and_hyphens() {
        assert_eq!(CompoundTerm::new("Non-Fiction").words(), strings(&["Non", "Fiction"]));
        assert_eq!(
            CompoundTerm::new("Human Computer Interaction").words(),
            strings(&["Human", "Computer", "Interaction"])
        );
        assert_eq!(CompoundTerm::new("Sci-Fi").words(), strings(&["Sci", "Fi"]));
    }

    #[test]
    fn find_by_words_requires_exact_length_and_case() {
        let table = CompoundTable::new(["Human Computer Interaction", "Computer Interaction"]);

        let found = table.find_by_words(&strings(&["Computer", "Interaction"]));
        assert_eq!(found.map(CompoundTerm::phrase), Some("Computer Interaction"));

        assert!(table.find_by_words(&strings(&["Human", "Computer"])).is_none());
        assert!(table.find_by_words(&strings(&["computer", "interaction"])).is_none());
        assert_eq!(table.max_words(), 3);
    }

    #[test]
    fn empty_table_has_no_windows() {
        let table = CompoundTable::default();
        assert_eq!(table.max_words(), 0);
        assert!(!table.contains_phrase("Sci-Fi"));
    }
}
