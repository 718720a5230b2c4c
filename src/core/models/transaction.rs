//! Transaction model
//!
//! A transaction records one circulation activity. It holds copies of the
//! book and patron as they were when the activity happened, so the log stays
//! an accurate history even after the library's records move on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Book, Patron};

/// What happened to the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    /// The book was lent to the patron
    #[serde(rename = "check out")]
    CheckOut,
    /// The book was returned by the patron
    #[serde(rename = "check in")]
    CheckIn,
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CheckOut => write!(f, "check out"),
            Self::CheckIn => write!(f, "check in"),
        }
    }
}

/// An immutable entry in the circulation log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    book: Book,
    patron: Patron,
    activity: Activity,
    occurred_at: DateTime<Utc>,
}

impl Transaction {
    /// Record an activity, snapshotting the book and patron
    #[must_use]
    pub fn new(book: &Book, patron: &Patron, activity: Activity) -> Self {
        Self {
            book: book.clone(),
            patron: patron.clone(),
            activity,
            occurred_at: Utc::now(),
        }
    }

    /// The book as it was when the activity was recorded
    #[must_use]
    pub const fn book(&self) -> &Book {
        &self.book
    }

    /// The patron as they were when the activity was recorded
    #[must_use]
    pub const fn patron(&self) -> &Patron {
        &self.patron
    }

    /// What happened
    #[must_use]
    pub const fn activity(&self) -> Activity {
        self.activity
    }

    /// When it happened
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
