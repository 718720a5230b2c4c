//! Library errors

use thiserror::Error;

/// Which kind of record an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A book, keyed by ISBN
    Book,
    /// A patron, keyed by card number
    Patron,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Book => write!(f, "book"),
            Self::Patron => write!(f, "patron"),
        }
    }
}

/// Errors raised by library operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// The book or patron is not registered with the library
    #[error("{kind} not found in library: {key}")]
    NotFound {
        /// Kind of record looked up
        kind: EntityKind,
        /// ISBN or card number
        key: String,
    },

    /// The patron has an outstanding balance
    #[error("patron {card_number} owes {owed} in fees and cannot check out")]
    FeesOwed {
        /// Card number of the patron
        card_number: String,
        /// Outstanding balance
        owed: i64,
    },

    /// A record with the same identity key is already registered
    #[error("{kind} already registered: {key}")]
    DuplicateKey {
        /// Kind of record being added
        kind: EntityKind,
        /// ISBN or card number
        key: String,
    },

    /// The book is out and the policy forbids lending it again
    #[error("book already checked out: {isbn}")]
    AlreadyCheckedOut {
        /// ISBN of the book
        isbn: String,
    },

    /// A shared library handle was poisoned by a panicking writer
    #[error("library lock poisoned")]
    LockPoisoned,
}

impl LibraryError {
    pub(crate) fn book_not_found(isbn: &str) -> Self {
        Self::NotFound {
            kind: EntityKind::Book,
            key: isbn.to_string(),
        }
    }

    pub(crate) fn patron_not_found(card_number: &str) -> Self {
        Self::NotFound {
            kind: EntityKind::Patron,
            key: card_number.to_string(),
        }
    }
}
