//! Rules file management

use crate::domain::tags::TagRules;
use crate::error::{Result, ShelftagError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a rules file to use instead of the built-in rules.
pub const RULES_ENV: &str = "SHELFTAG_RULES";

/// On-disk form of the rule tables (TOML).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    #[serde(default)]
    pub compound_terms: Vec<String>,
    #[serde(default)]
    pub overrides: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub renames: BTreeMap<String, String>,
}

impl RulesFile {
    pub fn from_rules(rules: &TagRules) -> Self {
        RulesFile {
            compound_terms: rules
                .compounds()
                .terms()
                .iter()
                .map(|term| term.phrase().to_string())
                .collect(),
            overrides: rules.overrides().clone(),
            renames: rules.renames().clone(),
        }
    }

    /// Load a rules file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShelftagError::Config(format!("Rules file not found: {}", path.display()))
            } else {
                ShelftagError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Write this rules file to disk, refusing to overwrite an existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(ShelftagError::Config(format!(
                "Refusing to overwrite existing file: {}",
                path.display()
            )));
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn into_rules(self) -> Result<TagRules> {
        TagRules::new(self.compound_terms, self.overrides, self.renames)
    }
}

/// Resolve the active rules: an explicit path first, then `SHELFTAG_RULES`,
/// then the built-in tables.
pub fn load_rules(explicit: Option<&Path>) -> Result<TagRules> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::var_os(RULES_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from),
    };

    match path {
        Some(path) => {
            tracing::info!("Loading rules from {}", path.display());
            RulesFile::load(&path)?.into_rules()
        }
        None => {
            tracing::debug!("Using built-in rules");
            Ok(TagRules::default())
        }
    }
}
