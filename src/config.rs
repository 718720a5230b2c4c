//! Configuration management
//!
//! Holds the circulation policy and the seed catalog the CLI loads into a
//! fresh library. Config is stored at `~/.config/stacks/config.toml`; the
//! `STACKS_CONFIG` environment variable points elsewhere.
//!
//! ```toml
//! [policy]
//! allow_double_checkout = true
//!
//! [[books]]
//! isbn = "123456"
//! title = "Sample Book 1"
//! author = "Author 1"
//! copyright_year = 2000
//! genre = "fiction"
//!
//! [[patrons]]
//! name = "User 1"
//! card_number = "1234"
//! owed_fees = 0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{Book, CirculationPolicy, Genre, Patron};
use crate::core::{Library, LibraryError};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "STACKS_CONFIG";

/// Global config directory name, relative to the home directory
const CONFIG_DIR: &str = ".config/stacks";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// stacks configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Lending rules
    #[serde(default)]
    pub policy: CirculationPolicy,
    /// Books registered at start-up
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<BookEntry>,
    /// Patrons registered at start-up
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patrons: Vec<PatronEntry>,
}

/// Book entry in TOML (serialization format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    /// ISBN
    pub isbn: String,
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Copyright year
    pub copyright_year: i32,
    /// Genre: fiction, non_fiction, periodical, biography, children
    #[serde(default)]
    pub genre: Genre,
    /// Whether the book starts out lent
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub checked_out: bool,
}

/// Patron entry in TOML (serialization format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatronEntry {
    /// Display name
    pub name: String,
    /// Card number
    pub card_number: String,
    /// Starting fee balance
    #[serde(default)]
    pub owed_fees: i64,
}

impl BookEntry {
    /// Convert to the Book model
    #[must_use]
    pub fn to_book(&self) -> Book {
        let mut book = Book::new(
            self.isbn.clone(),
            self.title.clone(),
            self.author.clone(),
            self.copyright_year,
            self.genre,
        );
        if self.checked_out {
            book.check_out();
        }
        book
    }

    /// Create from the Book model
    #[must_use]
    pub fn from_book(book: &Book) -> Self {
        Self {
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            copyright_year: book.copyright_year(),
            genre: book.genre(),
            checked_out: book.is_checked_out(),
        }
    }
}

impl PatronEntry {
    /// Convert to the Patron model
    #[must_use]
    pub fn to_patron(&self) -> Patron {
        let mut patron = Patron::new(self.name.clone(), self.card_number.clone());
        patron.set_fees(self.owed_fees);
        patron
    }

    /// Create from the Patron model
    #[must_use]
    pub fn from_patron(patron: &Patron) -> Self {
        Self {
            name: patron.name().to_string(),
            card_number: patron.card_number().to_string(),
            owed_fees: patron.owed_fees(),
        }
    }
}

impl LibraryConfig {
    /// Get the config file path
    ///
    /// `STACKS_CONFIG` wins over the default location.
    #[must_use]
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// The two-book, two-patron catalog used by `stacks init` and `stacks demo`
    #[must_use]
    pub fn sample() -> Self {
        Self {
            policy: CirculationPolicy::default(),
            books: vec![
                BookEntry::from_book(&Book::new(
                    "123456",
                    "Sample Book 1",
                    "Author 1",
                    2000,
                    Genre::Fiction,
                )),
                BookEntry::from_book(&Book::new(
                    "789012",
                    "Sample Book 2",
                    "Author 2",
                    2010,
                    Genre::NonFiction,
                )),
            ],
            patrons: vec![
                PatronEntry::from_patron(&Patron::new("User 1", "1234")),
                PatronEntry::from_patron(&Patron::new("User 2", "5678")),
            ],
        }
    }

    /// Build a library holding the seed catalog under the configured policy
    ///
    /// Duplicate ISBNs or card numbers in the file are rejected.
    pub fn build_library(&self) -> Result<Library, LibraryError> {
        let mut library = Library::with_policy(self.policy);
        for entry in &self.books {
            library.add_book(entry.to_book())?;
        }
        for entry in &self.patrons {
            library.add_patron(entry.to_patron())?;
        }
        Ok(library)
    }
}
