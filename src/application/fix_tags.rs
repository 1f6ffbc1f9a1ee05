//! Tag repair use case

use crate::domain::tags::TagRules;
use crate::domain::Bookshelf;
use crate::error::Result;
use crate::infrastructure::BookshelfRepository;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChange {
    pub title: String,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    pub total_books: usize,
    pub changes: Vec<TagChange>,
    pub unique_tags: BTreeSet<String>,
    pub dry_run: bool,
}

impl FixReport {
    pub fn modified_books(&self) -> usize {
        self.changes.len()
    }
}

/// Repair every existing `Tags` list in place, returning what changed.
pub fn fix_bookshelf(bookshelf: &mut Bookshelf, rules: &TagRules) -> Vec<TagChange> {
    let mut changes = Vec::new();

    for book in &mut bookshelf.books {
        let Some(before) = book.tags() else {
            continue;
        };

        let after = rules.repair(&before);
        if after == before {
            continue;
        }

        tracing::debug!("'{}': {:?} -> {:?}", book.title(), before, after);
        book.set_tags(after.clone());
        changes.push(TagChange {
            title: book.title().to_string(),
            before,
            after,
        });
    }

    changes
}

pub fn fix_tags(
    repository: &impl BookshelfRepository,
    rules: &TagRules,
    options: FixOptions,
) -> Result<FixReport> {
    let mut bookshelf = repository.load()?;
    let changes = fix_bookshelf(&mut bookshelf, rules);

    if !options.dry_run {
        repository.save(&bookshelf)?;
    }

    Ok(FixReport {
        total_books: bookshelf.len(),
        changes,
        unique_tags: super::collect_unique_tags(&bookshelf),
        dry_run: options.dry_run,
    })
}
