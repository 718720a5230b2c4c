//! Shared test fixtures and helpers
//!
//! Builders for books and patrons, and a pre-stocked library matching the
//! sample catalog.

use stacks::Library;
use stacks::core::models::{Book, CirculationPolicy, Genre, Patron};

/// Builder for creating test books
pub struct BookBuilder {
    isbn: String,
    title: String,
    author: String,
    copyright_year: i32,
    genre: Genre,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self {
            isbn: "TEST-1".to_string(),
            title: "Test Book".to_string(),
            author: "Test Author".to_string(),
            copyright_year: 2020,
            genre: Genre::Fiction,
        }
    }

    pub fn isbn(mut self, isbn: &str) -> Self {
        self.isbn = isbn.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.copyright_year = year;
        self
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.genre = genre;
        self
    }

    pub fn build(self) -> Book {
        Book::new(self.isbn, self.title, self.author, self.copyright_year, self.genre)
    }
}

impl Default for BookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test patrons
pub struct PatronBuilder {
    name: String,
    card_number: String,
    fees: i64,
}

impl PatronBuilder {
    pub fn new() -> Self {
        Self {
            name: "Test Patron".to_string(),
            card_number: "0000".to_string(),
            fees: 0,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn card(mut self, card_number: &str) -> Self {
        self.card_number = card_number.to_string();
        self
    }

    pub fn fees(mut self, fees: i64) -> Self {
        self.fees = fees;
        self
    }

    pub fn build(self) -> Patron {
        let mut patron = Patron::new(self.name, self.card_number);
        patron.set_fees(self.fees);
        patron
    }
}

impl Default for PatronBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn book1() -> Book {
    BookBuilder::new()
        .isbn("123456")
        .title("Sample Book 1")
        .author("Author 1")
        .year(2000)
        .genre(Genre::Fiction)
        .build()
}

pub fn book2() -> Book {
    BookBuilder::new()
        .isbn("789012")
        .title("Sample Book 2")
        .author("Author 2")
        .year(2010)
        .genre(Genre::NonFiction)
        .build()
}

pub fn patron1() -> Patron {
    PatronBuilder::new().name("User 1").card("1234").build()
}

pub fn patron2() -> Patron {
    PatronBuilder::new().name("User 2").card("5678").build()
}

/// Library holding book1, book2, patron1 and patron2
pub fn sample_library() -> Library {
    sample_library_with(CirculationPolicy::default())
}

pub fn sample_library_with(policy: CirculationPolicy) -> Library {
    let mut library = Library::with_policy(policy);
    library.add_book(book1()).unwrap();
    library.add_book(book2()).unwrap();
    library.add_patron(patron1()).unwrap();
    library.add_patron(patron2()).unwrap();
    library
}
