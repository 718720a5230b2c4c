//! The library aggregate
//!
//! [`Library`] owns every book, patron and transaction. Callers hand it
//! books and patrons once; afterwards they refer to them by identity key
//! (ISBN, card number) and all state changes happen on the library's own
//! records, never on the caller's copies.

use log::{debug, warn};

use super::{EntityKind, LibraryError};
use super::models::{Activity, Book, CirculationPolicy, Patron, Transaction};
use super::services::check_out_eligibility;

/// The library: books, patrons and the circulation log
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: Vec<Book>,
    patrons: Vec<Patron>,
    transactions: Vec<Transaction>,
    policy: CirculationPolicy,
}

impl Library {
    /// Create an empty library with the default policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty library with the given policy
    #[must_use]
    pub fn with_policy(policy: CirculationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The lending rules in force
    #[must_use]
    pub const fn policy(&self) -> CirculationPolicy {
        self.policy
    }

    // === Registration ===

    /// Register a book
    ///
    /// Fails with [`LibraryError::DuplicateKey`] if a book with the same ISBN
    /// is already registered; the collection is left unchanged.
    pub fn add_book(&mut self, book: Book) -> Result<(), LibraryError> {
        if self.book_position(book.isbn()).is_some() {
            return Err(LibraryError::DuplicateKey {
                kind: EntityKind::Book,
                key: book.isbn().to_string(),
            });
        }
        debug!("Registered book {} ({})", book.isbn(), book.title());
        self.books.push(book);
        Ok(())
    }

    /// Register a patron
    ///
    /// Fails with [`LibraryError::DuplicateKey`] if the card number is taken.
    pub fn add_patron(&mut self, patron: Patron) -> Result<(), LibraryError> {
        if self.patron_position(patron.card_number()).is_some() {
            return Err(LibraryError::DuplicateKey {
                kind: EntityKind::Patron,
                key: patron.card_number().to_string(),
            });
        }
        debug!("Registered patron {} ({})", patron.card_number(), patron.name());
        self.patrons.push(patron);
        Ok(())
    }

    // === Circulation ===

    /// Lend `book` to `patron`
    ///
    /// Only the ISBN and card number of the arguments are used; eligibility
    /// is judged against the library's own records.
    pub fn check_out_book(&mut self, book: &Book, patron: &Patron) -> Result<(), LibraryError> {
        self.check_out(book.isbn(), patron.card_number())
    }

    /// Lend the book with `isbn` to the patron with `card_number`
    ///
    /// # Errors
    ///
    /// - [`LibraryError::NotFound`] if either is not registered (book first)
    /// - [`LibraryError::FeesOwed`] if the patron has a positive balance
    /// - [`LibraryError::AlreadyCheckedOut`] under a strict policy
    pub fn check_out(&mut self, isbn: &str, card_number: &str) -> Result<(), LibraryError> {
        let book_idx = self
            .book_position(isbn)
            .ok_or_else(|| LibraryError::book_not_found(isbn))?;
        let patron_idx = self
            .patron_position(card_number)
            .ok_or_else(|| LibraryError::patron_not_found(card_number))?;

        let book = &mut self.books[book_idx];
        let patron = &self.patrons[patron_idx];

        if let Err(err) = check_out_eligibility(book, patron, self.policy) {
            warn!("Refused check-out of {isbn} to {card_number}: {err}");
            return Err(err);
        }

        book.check_out();
        self.transactions.push(Transaction::new(book, patron, Activity::CheckOut));
        debug!("Checked out {isbn} to {card_number}");
        Ok(())
    }

    /// Take `book` back from `patron`
    pub fn check_in_book(&mut self, book: &Book, patron: &Patron) -> Result<(), LibraryError> {
        self.check_in(book.isbn(), patron.card_number())
    }

    /// Take the book with `isbn` back from the patron with `card_number`
    ///
    /// Fees never block a return. Returning a book that is not out leaves it
    /// available and is still recorded.
    pub fn check_in(&mut self, isbn: &str, card_number: &str) -> Result<(), LibraryError> {
        let book_idx = self
            .book_position(isbn)
            .ok_or_else(|| LibraryError::book_not_found(isbn))?;
        let patron_idx = self
            .patron_position(card_number)
            .ok_or_else(|| LibraryError::patron_not_found(card_number))?;

        let book = &mut self.books[book_idx];
        let patron = &self.patrons[patron_idx];

        book.check_in();
        self.transactions.push(Transaction::new(book, patron, Activity::CheckIn));
        debug!("Checked in {isbn} from {card_number}");
        Ok(())
    }

    /// Replace a registered patron's fee balance
    pub fn set_patron_fees(&mut self, card_number: &str, amount: i64) -> Result<(), LibraryError> {
        let patron = self
            .patrons
            .iter_mut()
            .find(|p| p.card_number() == card_number)
            .ok_or_else(|| LibraryError::patron_not_found(card_number))?;
        patron.set_fees(amount);
        debug!("Set fees for {card_number} to {amount}");
        Ok(())
    }

    // === Queries ===

    /// Look up a book by ISBN
    #[must_use]
    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn() == isbn)
    }

    /// Look up a patron by card number
    #[must_use]
    pub fn patron(&self, card_number: &str) -> Option<&Patron> {
        self.patrons.iter().find(|p| p.card_number() == card_number)
    }

    /// Whether this book (by ISBN) is registered
    #[must_use]
    pub fn contains_book(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    /// Whether this patron (by card number) is registered
    #[must_use]
    pub fn contains_patron(&self, patron: &Patron) -> bool {
        self.patrons.contains(patron)
    }

    /// All books, in registration order
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All patrons, in registration order
    #[must_use]
    pub fn patrons(&self) -> &[Patron] {
        &self.patrons
    }

    /// The circulation log, oldest first
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Patrons with a positive balance, in registration order
    #[must_use]
    pub fn patrons_with_fees(&self) -> Vec<&Patron> {
        self.patrons.iter().filter(|p| p.owes_fees()).collect()
    }

    /// Books currently lent out, in registration order
    #[must_use]
    pub fn checked_out_books(&self) -> Vec<&Book> {
        self.books.iter().filter(|b| b.is_checked_out()).collect()
    }

    fn book_position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| b.isbn() == isbn)
    }

    fn patron_position(&self, card_number: &str) -> Option<usize> {
        self.patrons.iter().position(|p| p.card_number() == card_number)
    }
}
