use crate::error::{AbookError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILENAME: &str = "settings.toml";

/// Startup settings, read from the `[settings]` table of a TOML file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Path of the address book file. Empty keeps the book in memory only.
    pub address_book_file: PathBuf,

    /// Label shown above the full listing.
    pub description: String,

    /// Command executed once before the first prompt.
    pub mode: String,
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    settings: Settings,
}

impl Settings {
    /// Load settings from `path`. Every key is required.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AbookError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
            .map_err(|e| AbookError::Config(format!("{}: {}", path.display(), e)))
    }

    fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str::<SettingsFile>(content).map(|file| file.settings)
    }

    /// Resolves a relative book path against the directory holding the settings file.
    pub fn resolve_book_path(&self, config_path: &Path) -> PathBuf {
        if self.address_book_file.as_os_str().is_empty() || self.address_book_file.is_absolute()
        {
            return self.address_book_file.clone();
        }
        match config_path.parent() {
            Some(dir) => dir.join(&self.address_book_file),
            None => self.address_book_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = r#"
[settings]
address_book_file = "book.csv"
description = "My address book"
mode = "v"
"#;

    #[test]
    fn parses_all_keys() {
        let settings = Settings::parse(VALID).unwrap();
        assert_eq!(settings.address_book_file, PathBuf::from("book.csv"));
        assert_eq!(settings.description, "My address book");
        assert_eq!(settings.mode, "v");
    }

    #[test]
    fn missing_key_is_an_error() {
        let content = "[settings]\naddress_book_file = \"book.csv\"\nmode = \"v\"\n";
        assert!(Settings::parse(content).is_err());
    }

    #[test]
    fn missing_section_is_an_error() {
        assert!(Settings::parse("description = \"x\"\n").is_err());
    }

    #[test]
    fn load_missing_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let err = Settings::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, AbookError::Config(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
        fs::write(&path, VALID).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.description, "My address book");
    }

    #[test]
    fn relative_book_path_follows_config_location() {
        let settings = Settings::parse(VALID).unwrap();
        let resolved = settings.resolve_book_path(Path::new("/etc/abook/settings.toml"));
        assert_eq!(resolved, PathBuf::from("/etc/abook/book.csv"));
    }

    #[test]
    fn empty_book_path_stays_empty() {
        let mut settings = Settings::parse(VALID).unwrap();
        settings.address_book_file = PathBuf::new();
        assert!(settings
            .resolve_book_path(Path::new("settings.toml"))
            .as_os_str()
            .is_empty());
    }
}
