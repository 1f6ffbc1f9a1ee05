//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::{load_rules, RulesFile, RULES_ENV};
pub use repository::{BookshelfRepository, JsonFileRepository, DEFAULT_BOOKSHELF_FILE};
