//! shelftag - Bookshelf genre-to-tags migration tool
//!
//! Rewrites the free-text `Genre` field of a book-tracking JSON file into a
//! normalized `Tags` list, and repairs tag lists whose compound terms were
//! split apart by an earlier conversion.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ShelftagError;
