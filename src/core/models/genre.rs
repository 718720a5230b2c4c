//! Book genres
//!
//! Each genre carries a stable numeric code used when rendering a book.

use serde::{Deserialize, Serialize};

/// Shelf classification of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    /// Novels and other invented narratives
    #[default]
    Fiction,
    /// Factual works
    NonFiction,
    /// Magazines, journals and other serials
    Periodical,
    /// Life stories
    Biography,
    /// Children's books
    Children,
}

impl Genre {
    /// All genres, ordered by code
    pub const ALL: [Self; 5] = [
        Self::Fiction,
        Self::NonFiction,
        Self::Periodical,
        Self::Biography,
        Self::Children,
    ];

    /// Numeric code of the genre (0 = Fiction .. 4 = Children)
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Fiction => 0,
            Self::NonFiction => 1,
            Self::Periodical => 2,
            Self::Biography => 3,
            Self::Children => 4,
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fiction => write!(f, "fiction"),
            Self::NonFiction => write!(f, "non_fiction"),
            Self::Periodical => write!(f, "periodical"),
            Self::Biography => write!(f, "biography"),
            Self::Children => write!(f, "children"),
        }
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "fiction" | "0" => Ok(Self::Fiction),
            "non_fiction" | "nonfiction" | "1" => Ok(Self::NonFiction),
            "periodical" | "2" => Ok(Self::Periodical),
            "biography" | "3" => Ok(Self::Biography),
            "children" | "4" => Ok(Self::Children),
            _ => Err(format!(
                "Invalid genre: {s}. Use: fiction, non_fiction, periodical, biography, children"
            )),
        }
    }
}
