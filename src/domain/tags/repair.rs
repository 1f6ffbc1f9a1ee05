//! Repair of tag lists where compound terms were split into separate tags.

use super::rules::TagRules;

/// Re-merge split compound terms, apply renames and drop duplicates.
///
/// A single pass can leave two compound words adjacent once the duplicate that
/// separated them is dropped, so passes repeat until the list stops changing.
/// That makes the result a fixed point: `repair_tags(&repair_tags(t)) == repair_tags(t)`.
pub fn repair_tags(tags: &[String], rules: &TagRules) -> Vec<String> {
    let mut current = repair_pass(tags, rules);
    loop {
        let next = repair_pass(&current, rules);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn repair_pass(tags: &[String], rules: &TagRules) -> Vec<String> {
    let compounds = rules.compounds();
    let widest = compounds.max_words();
    let mut merged = Vec::with_capacity(tags.len());
    let mut cursor = 0usize;

    'scan: while cursor < tags.len() {
        // Longest window first, so "Human Computer Interaction" beats
        // "Computer Interaction" at the same position.
        for width in (2..=widest).rev() {
            let Some(window) = tags.get(cursor..cursor + width) else {
                continue;
            };
            if let Some(term) = compounds.find_by_words(window) {
                merged.push(term.phrase().to_string());
                cursor += width;
                continue 'scan;
            }
        }

        merged.push(rules.rename(&tags[cursor]).to_string());
        cursor += 1;
    }

    dedup_preserving_order(merged)
}

/// Drop repeated tags, keeping each at its first position.
pub fn dedup_preserving_order(tags: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn repair(items: &[&str]) -> Vec<String> {
        repair_tags(&strings(items), &TagRules::default())
    }

    #[test]
    fn merges_three_word_terms() {
        assert_eq!(
            repair(&["Human", "Computer", "Interaction"]),
            strings(&["Human Computer Interaction"])
        );
    }

    #[test]
    fn merges_two_word_terms_and_renames_strays() {
        assert_eq!(
            repair(&["Self", "Help", "Photography"]),
            strings(&["Self-Help", "Art"])
        );
    }

    #[test]
    fn dedup_keeps_first_position() {
        assert_eq!(repair(&["Art", "Sci", "Fi", "Art"]), strings(&["Art", "Sci-Fi"]));
    }

    #[test]
    fn shorter_window_used_when_longer_does_not_fit() {
        assert_eq!(
            repair(&["History", "Computer", "Interaction"]),
            strings(&["History", "Computer Interaction"])
        );
        assert_eq!(
            repair(&["Human", "Computer"]),
            strings(&["Human", "Computer"])
        );
    }

    #[test]
    fn merged_words_are_not_renamed() {
        let rules = TagRules::new(
            vec!["Fine Art".to_string()],
            BTreeMap::new(),
            [("Art".to_string(), "Visual Art".to_string())].into_iter().collect(),
        )
        .unwrap();
        assert_eq!(
            repair_tags(&strings(&["Fine", "Art", "Art"]), &rules),
            strings(&["Fine Art", "Visual Art"])
        );
    }

    #[test]
    fn correct_lists_are_unchanged() {
        let tags = strings(&["Non-Fiction", "History", "Science Fiction"]);
        assert_eq!(repair_tags(&tags, &TagRules::default()), tags);
        assert!(repair(&[]).is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(repair(&["sci", "fi"]), strings(&["sci", "fi"]));
    }

    #[test]
    fn repair_is_idempotent() {
        let cases: &[&[&str]] = &[
            &["Art", "Sci", "Fi", "Art"],
            &["Sci", "Art", "Sci", "Fi"],
            &["Photography", "Art", "Non", "Fiction"],
            &["Human", "Computer", "Computer", "Interaction"],
            &["Color", "Theory", "Color", "Theory"],
            &["Self", "Help", "Self-Help"],
        ];
        for case in cases {
            let once = repair(case);
            assert_eq!(repair_tags(&once, &TagRules::default()), once, "{:?}", case);
        }
    }

    #[test]
    fn gap_closed_by_dedup_is_merged() {
        assert_eq!(
            repair(&["Art", "Sci", "Art", "Fi"]),
            strings(&["Art", "Sci-Fi"])
        );
    }
}
