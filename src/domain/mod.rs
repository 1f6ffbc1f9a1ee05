//! Domain layer - Tag rules and the bookshelf document model

pub mod bookshelf;
pub mod tags;

pub use bookshelf::{BookRecord, Bookshelf};
pub use tags::TagRules;
