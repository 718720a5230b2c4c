//! Shared library handle
//!
//! Wraps a [`Library`] for use from several threads. Mutations take the
//! write lock; queries take the read lock and return owned copies so no
//! guard outlives the call.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::models::{Book, Patron, Transaction};
use super::{Library, LibraryError};

/// Cloneable, thread-safe handle to one library
#[derive(Debug, Clone, Default)]
pub struct SharedLibrary {
    inner: Arc<RwLock<Library>>,
}

impl From<Library> for SharedLibrary {
    fn from(library: Library) -> Self {
        Self::new(library)
    }
}

impl SharedLibrary {
    /// Share an existing library
    #[must_use]
    pub fn new(library: Library) -> Self {
        Self {
            inner: Arc::new(RwLock::new(library)),
        }
    }

    /// Register a book
    pub fn add_book(&self, book: Book) -> Result<(), LibraryError> {
        self.write()?.add_book(book)
    }

    /// Register a patron
    pub fn add_patron(&self, patron: Patron) -> Result<(), LibraryError> {
        self.write()?.add_patron(patron)
    }

    /// Lend a book, see [`Library::check_out`]
    pub fn check_out(&self, isbn: &str, card_number: &str) -> Result<(), LibraryError> {
        self.write()?.check_out(isbn, card_number)
    }

    /// Take a book back, see [`Library::check_in`]
    pub fn check_in(&self, isbn: &str, card_number: &str) -> Result<(), LibraryError> {
        self.write()?.check_in(isbn, card_number)
    }

    /// Replace a patron's fee balance
    pub fn set_patron_fees(&self, card_number: &str, amount: i64) -> Result<(), LibraryError> {
        self.write()?.set_patron_fees(card_number, amount)
    }

    /// Copy of the book with `isbn`, if registered
    pub fn book(&self, isbn: &str) -> Result<Option<Book>, LibraryError> {
        Ok(self.read()?.book(isbn).cloned())
    }

    /// Copy of the patron with `card_number`, if registered
    pub fn patron(&self, card_number: &str) -> Result<Option<Patron>, LibraryError> {
        Ok(self.read()?.patron(card_number).cloned())
    }

    /// Copies of the patrons with a positive balance
    pub fn patrons_with_fees(&self) -> Result<Vec<Patron>, LibraryError> {
        Ok(self.read()?.patrons_with_fees().into_iter().cloned().collect())
    }

    /// Copy of the circulation log
    pub fn transactions(&self) -> Result<Vec<Transaction>, LibraryError> {
        Ok(self.read()?.transactions().to_vec())
    }

    /// Copy of the whole library
    pub fn snapshot(&self) -> Result<Library, LibraryError> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Library>, LibraryError> {
        self.inner.read().map_err(|_| LibraryError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Library>, LibraryError> {
        self.inner.write().map_err(|_| LibraryError::LockPoisoned)
    }
}
