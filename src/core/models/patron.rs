//! Patron model

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A registered borrower
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patron {
    name: String,
    card_number: String,
    #[serde(default)]
    owed_fees: i64,
}

impl Patron {
    /// Create a new patron with a zero balance
    #[must_use]
    pub fn new(name: impl Into<String>, card_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            card_number: card_number.into(),
            owed_fees: 0,
        }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Library card number - the identity key
    #[must_use]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Current fee balance
    #[must_use]
    pub const fn owed_fees(&self) -> i64 {
        self.owed_fees
    }

    /// True when the balance is positive
    #[must_use]
    pub const fn owes_fees(&self) -> bool {
        self.owed_fees > 0
    }

    /// Replace the fee balance. Negative amounts are stored unchanged.
    pub const fn set_fees(&mut self, amount: i64) {
        self.owed_fees = amount;
    }
}

impl PartialEq for Patron {
    fn eq(&self, other: &Self) -> bool {
        self.card_number == other.card_number
    }
}

impl Eq for Patron {}

impl Hash for Patron {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.card_number.hash(state);
    }
}
