//! Application layer - Use cases and orchestration

pub mod convert_genres;
pub mod fix_tags;
pub mod preview;

pub use convert_genres::{convert_genres, ConvertOptions, ConvertReport};
pub use fix_tags::{fix_tags, FixOptions, FixReport};
pub use preview::{preview_genres, PreviewLine, SAMPLE_GENRES};

use crate::domain::Bookshelf;
use std::collections::BTreeSet;

/// Every distinct tag on the shelf, sorted.
fn collect_unique_tags(bookshelf: &Bookshelf) -> BTreeSet<String> {
    bookshelf
        .books
        .iter()
        .filter_map(|book| book.tags())
        .flatten()
        .collect()
}
