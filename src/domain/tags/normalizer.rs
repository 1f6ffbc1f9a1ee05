//! Genre string to tag list conversion.
//!
//! The genre is first cut into spans: raw text, or a reference to a compound
//! term found verbatim in the input. Delimiters are only looked for inside raw
//! spans, so a compound term can never be split whatever it contains.

use super::rules::TagRules;

/// Tag boundaries, in the order they are applied. Bare `-` is deliberately
/// absent so hyphenated words such as `Non-Fiction` stay whole.
const DELIMITERS: &[&str] = &[" / ", " - ", "/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span<'a> {
    Raw(&'a str),
    Compound(usize),
}

/// Convert a raw genre string into an ordered list of tags.
///
/// Absent or blank input yields an empty list. The result is not deduplicated.
pub fn normalize_genre<'a>(genre: impl Into<Option<&'a str>>, rules: &TagRules) -> Vec<String> {
    let Some(genre) = genre.into().map(str::trim) else {
        return Vec::new();
    };
    if genre.is_empty() {
        return Vec::new();
    }

    if let Some(tags) = rules.override_for(genre) {
        return tags.to_vec();
    }

    let spans = protect_compounds(genre, rules);
    split_spans(&spans, rules)
}

fn protect_compounds<'a>(genre: &'a str, rules: &'a TagRules) -> Vec<Span<'a>> {
    let mut spans = vec![Span::Raw(genre)];

    for (index, term) in rules.compounds().terms().iter().enumerate() {
        let phrase = term.phrase();
        if phrase.is_empty() {
            continue;
        }

        let mut protected = Vec::with_capacity(spans.len());
        for span in spans {
            let Span::Raw(text) = span else {
                protected.push(span);
                continue;
            };

            let mut rest = text;
            while let Some(pos) = rest.find(phrase) {
                if pos > 0 {
                    protected.push(Span::Raw(&rest[..pos]));
                }
                protected.push(Span::Compound(index));
                rest = &rest[pos + phrase.len()..];
            }
            if !rest.is_empty() {
                protected.push(Span::Raw(rest));
            }
        }
        spans = protected;
    }

    spans
}

fn split_spans(spans: &[Span<'_>], rules: &TagRules) -> Vec<String> {
    let mut tags = Vec::new();
    let mut current = String::new();

    for span in spans {
        match span {
            Span::Compound(index) => {
                if let Some(term) = rules.compounds().get(*index) {
                    current.push_str(term.phrase());
                }
            }
            Span::Raw(text) => {
                let mut pieces = split_raw(text).into_iter();
                if let Some(first) = pieces.next() {
                    current.push_str(first);
                }
                for piece in pieces {
                    finish_tag(&mut current, &mut tags);
                    current.push_str(piece);
                }
            }
        }
    }
    finish_tag(&mut current, &mut tags);

    tags
}

/// Split on each delimiter in turn, so `" / "` wins over the bare `"/"` it contains.
fn split_raw(text: &str) -> Vec<&str> {
    DELIMITERS.iter().fold(vec![text], |pieces, delimiter| {
        pieces
            .into_iter()
            .flat_map(|piece| piece.split(*delimiter))
            .collect()
    })
}

fn finish_tag(current: &mut String, tags: &mut Vec<String>) {
    let tag = current.trim();
    if !tag.is_empty() {
        tags.push(tag.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn normalize(genre: &str) -> Vec<String> {
        normalize_genre(genre, &TagRules::default())
    }

    #[test]
    fn empty_and_absent_input_yield_no_tags() {
        let rules = TagRules::default();
        assert!(normalize_genre("", &rules).is_empty());
        assert!(normalize_genre("   ", &rules).is_empty());
        assert!(normalize_genre(None, &rules).is_empty());
    }

    #[test]
    fn bare_hyphen_is_not_a_delimiter() {
        assert_eq!(normalize("Non-Fiction"), vec!["Non-Fiction"]);
        assert_eq!(normalize("Self-Help"), vec!["Self-Help"]);
        assert_eq!(normalize("Post-Apocalyptic"), vec!["Post-Apocalyptic"]);
    }

    #[test]
    fn splits_on_slashes_and_spaced_hyphens() {
        assert_eq!(normalize("Mystery / Thriller"), vec!["Mystery", "Thriller"]);
        assert_eq!(normalize("Fiction - Sci-Fi"), vec!["Fiction", "Sci-Fi"]);
        assert_eq!(normalize("Art/Design"), vec!["Art", "Design"]);
        assert_eq!(
            normalize("Self-Help / Philosophy"),
            vec!["Self-Help", "Philosophy"]
        );
    }

    #[test]
    fn override_wins_over_splitting() {
        assert_eq!(normalize("Photography / Art"), vec!["Art"]);
        assert_eq!(normalize("  Photography-Art  "), vec!["Art"]);
        assert_eq!(normalize("Art / Photography"), vec!["Art", "Photography"]);
    }

    #[test]
    fn drops_empty_segments_and_trims() {
        assert_eq!(normalize(" / History //  Memoir / "), vec!["History", "Memoir"]);
        assert!(normalize(" / ").is_empty());
    }

    #[test]
    fn keeps_duplicates_for_the_repair_pass() {
        assert_eq!(normalize("Art / Art"), vec!["Art", "Art"]);
    }

    #[test]
    fn pipe_has_no_special_meaning() {
        assert_eq!(normalize("Rock|Pop / Jazz"), vec!["Rock|Pop", "Jazz"]);
    }

    #[test]
    fn compound_with_internal_slash_is_never_split() {
        let rules = TagRules::new(
            vec!["Art/Design".to_string()],
            BTreeMap::new(),
            BTreeMap::new(),
        )
        .unwrap();
        assert_eq!(
            normalize_genre("Art/Design / History", &rules),
            vec!["Art/Design", "History"]
        );
        assert_eq!(
            normalize_genre("Art/Design/Art/Design", &rules),
            vec!["Art/Design", "Art/Design"]
        );
    }

    #[test]
    fn compound_with_spaced_hyphen_is_never_split() {
        let rules = TagRules::new(
            vec!["Rock - Pop".to_string()],
            BTreeMap::new(),
            BTreeMap::new(),
        )
        .unwrap();
        assert_eq!(
            normalize_genre("Music - Rock - Pop", &rules),
            vec!["Music", "Rock - Pop"]
        );
    }

    #[test]
    fn overlapping_terms_resolve_in_declaration_order() {
        let rules = TagRules::default();
        assert_eq!(
            normalize_genre("Human Computer Interaction / Design", &rules),
            vec!["Human Computer Interaction", "Design"]
        );
    }

    #[test]
    fn slash_priority_matches_sequential_replacement() {
        assert_eq!(normalize("x - / y"), vec!["x -", "y"]);
    }
}
