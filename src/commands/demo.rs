//! Built-in demonstration
//!
//! Registers two books and two patrons, then checks out one book to each
//! patron. A refused step is reported and the next one still runs.

use stacks::Library;
use stacks::config::LibraryConfig;
use stacks::core::models::Activity;
use stacks::output::{CirculationResult, DemoResult, OutputMode, TransactionInfo};

/// Run the demonstration
pub fn demo(mode: OutputMode) -> anyhow::Result<()> {
    let mut library: Library = LibraryConfig::sample().build_library()?;

    let steps = [("123456", "1234"), ("789012", "5678")]
        .into_iter()
        .map(|(isbn, card_number)| {
            let outcome = library.check_out(isbn, card_number);
            CirculationResult {
                success: outcome.is_ok(),
                activity: Activity::CheckOut.to_string(),
                isbn: isbn.to_string(),
                card_number: card_number.to_string(),
                error: outcome.err().map(|e| e.to_string()),
            }
        })
        .collect();

    DemoResult {
        steps,
        transactions: library.transactions().iter().map(TransactionInfo::from).collect(),
    }
    .render(mode);
    Ok(())
}
