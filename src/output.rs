//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::Library;
use crate::core::models::{Book, Genre, Patron, Transaction};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Information about a book
#[derive(Debug, Clone, Serialize)]
pub struct BookInfo {
    /// ISBN
    pub isbn: String,
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Copyright year
    pub copyright_year: i32,
    /// Genre name
    pub genre: String,
    /// Genre code
    pub genre_code: u8,
    /// Whether the book is lent out
    pub checked_out: bool,
}

impl From<&Book> for BookInfo {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            copyright_year: book.copyright_year(),
            genre: book.genre().to_string(),
            genre_code: book.genre().code(),
            checked_out: book.is_checked_out(),
        }
    }
}

/// Information about a patron
#[derive(Debug, Clone, Serialize)]
pub struct PatronInfo {
    /// Display name
    pub name: String,
    /// Card number
    pub card_number: String,
    /// Fee balance
    pub owed_fees: i64,
}

impl From<&Patron> for PatronInfo {
    fn from(patron: &Patron) -> Self {
        Self {
            name: patron.name().to_string(),
            card_number: patron.card_number().to_string(),
            owed_fees: patron.owed_fees(),
        }
    }
}

/// One circulation log entry
#[derive(Debug, Clone, Serialize)]
pub struct TransactionInfo {
    /// "check out" or "check in"
    pub activity: String,
    /// ISBN of the book
    pub isbn: String,
    /// Title of the book
    pub title: String,
    /// Card number of the patron
    pub card_number: String,
    /// When it happened (RFC3339)
    pub occurred_at: String,
}

impl From<&Transaction> for TransactionInfo {
    fn from(tx: &Transaction) -> Self {
        Self {
            activity: tx.activity().to_string(),
            isbn: tx.book().isbn().to_string(),
            title: tx.book().title().to_string(),
            card_number: tx.patron().card_number().to_string(),
            occurred_at: tx.occurred_at().to_rfc3339(),
        }
    }
}

/// Result of listing books
#[derive(Debug, Serialize)]
pub struct BookListResult {
    /// Books in registration order
    pub books: Vec<BookInfo>,
}

/// Result of listing patrons
#[derive(Debug, Serialize)]
pub struct PatronListResult {
    /// Patrons in registration order
    pub patrons: Vec<PatronInfo>,
}

/// Outcome of one check-out or check-in
#[derive(Debug, Serialize)]
pub struct CirculationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// "check out" or "check in"
    pub activity: String,
    /// ISBN requested
    pub isbn: String,
    /// Card number requested
    pub card_number: String,
    /// Error message when the operation was refused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of the demonstration run
#[derive(Debug, Serialize)]
pub struct DemoResult {
    /// Each attempted operation, in order
    pub steps: Vec<CirculationResult>,
    /// The circulation log afterwards
    pub transactions: Vec<TransactionInfo>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_error(message: &str) {
    println!("{} {}", "Error:".red().bold(), message);
}

impl BookListResult {
    /// Collect the books of a library, optionally only lent ones or one genre
    #[must_use]
    pub fn from_library(library: &Library, only_out: bool, genre: Option<Genre>) -> Self {
        Self {
            books: library
                .books()
                .iter()
                .filter(|b| !only_out || b.is_checked_out())
                .filter(|b| genre.is_none_or(|g| b.genre() == g))
                .map(BookInfo::from)
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.books.is_empty() {
            println!("No books registered.");
            return;
        }

        println!("Books:\n");
        for b in &self.books {
            let status = if b.checked_out {
                "OUT".yellow()
            } else {
                "IN".green()
            };
            println!("  [{}] {} - {}", status, b.isbn, b.title);
            println!("  {} ({}), {}\n", b.author, b.copyright_year, b.genre);
        }
    }
}

impl PatronListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.patrons.is_empty() {
            println!("No patrons found.");
            return;
        }

        println!("Patrons:\n");
        for p in &self.patrons {
            println!("  [{}] {}", p.card_number, p.name);
            if p.owed_fees > 0 {
                println!("  Owes: {}\n", p.owed_fees.to_string().red());
            } else {
                println!("  Owes: 0\n");
            }
        }
    }
}

impl CirculationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        match &self.error {
            None => println!("{}: {} / {}", self.activity, self.isbn, self.card_number),
            Some(message) => print_error(message),
        }
    }
}

impl DemoResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for step in &self.steps {
            step.render_human();
        }

        println!("\nTransactions: {}", self.transactions.len());
        for tx in &self.transactions {
            println!("  {} | {} | {} | {}", tx.occurred_at, tx.activity, tx.isbn, tx.card_number);
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
