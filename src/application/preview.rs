//! Preview use case: show how genre strings would be converted, without a file.

use crate::domain::tags::TagRules;

/// Genre strings covering the tricky cases: bare hyphens, overrides, mixed
/// separators and multi-word compounds.
pub const SAMPLE_GENRES: &[&str] = &[
    "Non-Fiction",
    "Self-Help",
    "Sci-Fi",
    "Photography / Art",
    "Fiction - Sci-Fi",
    "Self-Help / Philosophy",
    "Non-Fiction / History",
    "Mystery / Thriller",
    "Art / Photography",
    "Fiction / Historical",
    "Science Fiction",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub genre: String,
    pub tags: Vec<String>,
}

/// Convert each genre; falls back to [`SAMPLE_GENRES`] when none are given.
pub fn preview_genres(genres: &[String], rules: &TagRules, repair: bool) -> Vec<PreviewLine> {
    let inputs: Vec<String> = if genres.is_empty() {
        SAMPLE_GENRES.iter().map(|g| g.to_string()).collect()
    } else {
        genres.to_vec()
    };

    inputs
        .into_iter()
        .map(|genre| {
            let mut tags = rules.normalize(genre.as_str());
            if repair {
                tags = rules.repair(&tags);
            }
            PreviewLine { genre, tags }
        })
        .collect()
}
