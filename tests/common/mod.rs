use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn shelftag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("shelftag").unwrap();
    cmd.env_remove("SHELFTAG_RULES");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `content` as user_bookshelf.json in `temp` and return its path.
#[allow(dead_code)]
pub fn write_bookshelf(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("user_bookshelf.json");
    fs::write(&path, content).unwrap();
    path
}
