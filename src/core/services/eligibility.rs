//! Check-out eligibility
//!
//! Decides whether a registered patron may take a registered book.

use crate::core::LibraryError;
use crate::core::models::{Book, CirculationPolicy, Patron};

/// Decide whether `patron` may check out `book` under `policy`
///
/// Fees are checked before the book's state, so a patron who owes money is
/// told so even when the book is unavailable.
pub fn check_out_eligibility(
    book: &Book,
    patron: &Patron,
    policy: CirculationPolicy,
) -> Result<(), LibraryError> {
    if patron.owes_fees() {
        return Err(LibraryError::FeesOwed {
            card_number: patron.card_number().to_string(),
            owed: patron.owed_fees(),
        });
    }

    if book.is_checked_out() && !policy.allow_double_checkout {
        return Err(LibraryError::AlreadyCheckedOut {
            isbn: book.isbn().to_string(),
        });
    }

    Ok(())
}
