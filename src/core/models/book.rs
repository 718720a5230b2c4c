//! Book model
//!
//! A book is identified by its ISBN. Everything but the checked-out flag is
//! fixed when the book is created.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Genre;

/// A book in the library's collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    copyright_year: i32,
    genre: Genre,
    #[serde(default)]
    checked_out: bool,
}

impl Book {
    /// Create a new, available book
    ///
    /// No validation is applied: an empty ISBN is accepted as-is.
    #[must_use]
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        copyright_year: i32,
        genre: Genre,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            copyright_year,
            genre,
            checked_out: false,
        }
    }

    /// ISBN - the identity key
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Copyright year
    #[must_use]
    pub const fn copyright_year(&self) -> i32 {
        self.copyright_year
    }

    /// Genre
    #[must_use]
    pub const fn genre(&self) -> Genre {
        self.genre
    }

    /// Whether the book is currently lent out
    #[must_use]
    pub const fn is_checked_out(&self) -> bool {
        self.checked_out
    }

    /// Mark the book as lent out. Repeating the call changes nothing.
    pub const fn check_out(&mut self) {
        self.checked_out = true;
    }

    /// Mark the book as returned. Repeating the call changes nothing.
    pub const fn check_in(&mut self) {
        self.checked_out = false;
    }
}

// Identity is the ISBN alone.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "ISBN: {}", self.isbn)?;
        writeln!(f, "Genre: {}", self.genre.code())
    }
}
