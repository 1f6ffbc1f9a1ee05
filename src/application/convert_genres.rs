//! Genre-to-tags conversion use case

use crate::domain::tags::TagRules;
use crate::domain::Bookshelf;
use crate::error::Result;
use crate::infrastructure::BookshelfRepository;
use std::collections::BTreeSet;

/// Number of converted books echoed back in the summary.
pub const SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Run the repair pass on each freshly converted list.
    pub repair: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTags {
    pub title: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub total_books: usize,
    pub converted_books: usize,
    pub samples: Vec<BookTags>,
    pub unique_tags: BTreeSet<String>,
    pub dry_run: bool,
}

/// Replace every `Genre` field with a `Tags` list.
pub fn convert_bookshelf(bookshelf: &mut Bookshelf, rules: &TagRules, repair: bool) -> usize {
    let mut converted = 0usize;

    for book in bookshelf.books.iter_mut().filter(|book| book.has_genre()) {
        let mut tags = rules.normalize(book.genre());
        if repair {
            tags = rules.repair(&tags);
        }
        tracing::debug!("'{}': {:?} -> {:?}", book.title(), book.genre(), tags);

        book.replace_genre_with_tags(tags);
        converted += 1;
    }

    converted
}

pub fn convert_genres(
    repository: &impl BookshelfRepository,
    rules: &TagRules,
    options: ConvertOptions,
) -> Result<ConvertReport> {
    let mut bookshelf = repository.load()?;
    let converted_books = convert_bookshelf(&mut bookshelf, rules, options.repair);

    if !options.dry_run {
        repository.save(&bookshelf)?;
    }

    let samples = bookshelf
        .books
        .iter()
        .take(SAMPLE_SIZE)
        .map(|book| BookTags {
            title: book.title().to_string(),
            tags: book.tags().unwrap_or_default(),
        })
        .collect();

    Ok(ConvertReport {
        total_books: bookshelf.len(),
        converted_books,
        samples,
        unique_tags: super::collect_unique_tags(&bookshelf),
        dry_run: options.dry_run,
    })
}
