//! Content factory for loading characters and rules from a data directory.

use std::path::{Path, PathBuf};

use sheet_core::{Character, RulesConfig};

use crate::loaders::{CharacterFile, CharacterLoader, ConfigLoader, LoadResult};

/// Content factory that loads all sheet content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// └── characters/
///     ├── rook.ron
///     └── mira.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const RULES_FILE: &'static str = "rules.toml";
    pub const CHARACTERS_DIR: &'static str = "characters";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules from `rules.toml`. A missing file means stock rules.
    pub fn load_rules(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join(Self::RULES_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rules file, using stock rules");
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Path of `characters/{name}.ron`.
    pub fn character_path(&self, name: &str) -> PathBuf {
        self.data_dir
            .join(Self::CHARACTERS_DIR)
            .join(format!("{}.ron", name))
    }

    /// Load `characters/{name}.ron` without validating its items.
    pub fn load_character_file(&self, name: &str) -> LoadResult<CharacterFile> {
        CharacterLoader::load_file(&self.character_path(name))
    }

    /// Load and validate `characters/{name}.ron`.
    pub fn load_character(&self, name: &str) -> LoadResult<Character> {
        self.load_character_file(name)?.into_character()
    }

    /// Names of every `.ron` file under `characters/`, sorted.
    pub fn character_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join(Self::CHARACTERS_DIR);
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
