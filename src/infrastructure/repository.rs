//! Bookshelf JSON file repository

use crate::domain::Bookshelf;
use crate::error::{Result, ShelftagError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Default bookshelf file name, looked up relative to the working directory.
pub const DEFAULT_BOOKSHELF_FILE: &str = "user_bookshelf.json";

/// Abstract storage for a bookshelf document
pub trait BookshelfRepository {
    /// Location of the underlying document
    fn path(&self) -> &Path;

    /// Read and validate the whole bookshelf
    fn load(&self) -> Result<Bookshelf>;

    /// Replace the stored bookshelf
    fn save(&self, bookshelf: &Bookshelf) -> Result<()>;
}

/// JSON file implementation of BookshelfRepository
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    pub path: PathBuf,
    pub backup: bool,
}

impl JsonFileRepository {
    pub fn new(path: PathBuf) -> Self {
        JsonFileRepository {
            path,
            backup: false,
        }
    }

    /// Copy the current file to `<file>.bak` before every save.
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_BOOKSHELF_FILE.into());
        name.push(".bak");
        self.path.with_file_name(name)
    }

    /// Render the document: two-space indentation, non-ASCII kept literal,
    /// trailing newline.
    pub fn render(bookshelf: &Bookshelf) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(&bookshelf.clone().into_value())?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Write using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(&self, content: &str) -> Result<()> {
        let tmp_name = format!(
            ".{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_BOOKSHELF_FILE),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl BookshelfRepository for JsonFileRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Bookshelf> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShelftagError::BookshelfNotFound(self.path.clone())
            } else {
                ShelftagError::Io(e)
            }
        })?;

        let value: Value = serde_json::from_str(&contents)?;
        let bookshelf = Bookshelf::from_value(value)?;
        tracing::info!(
            "Loaded {} book(s) from {}",
            bookshelf.len(),
            self.path.display()
        );
        Ok(bookshelf)
    }

    fn save(&self, bookshelf: &Bookshelf) -> Result<()> {
        if self.backup && self.path.exists() {
            let backup = self.backup_path();
            fs::copy(&self.path, &backup)?;
            tracing::info!("Backed up {} to {}", self.path.display(), backup.display());
        }

        let content = Self::render(bookshelf)?;
        self.write_atomic(&content)?;
        tracing::info!(
            "Saved {} book(s) to {}",
            bookshelf.len(),
            self.path.display()
        );
        Ok(())
    }
}
