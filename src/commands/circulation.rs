//! Check-out and check-in against the seed catalog
//!
//! The catalog is rebuilt from config on every run, so these commands report
//! whether the operation would be accepted; nothing is written back.

use std::path::Path;

use stacks::config::LibraryConfig;
use stacks::core::models::Activity;
use stacks::output::{CirculationResult, OutputMode};

/// Check out `isbn` to `card_number`
pub fn checkout(
    config_path: &Path,
    isbn: &str,
    card_number: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    run(config_path, Activity::CheckOut, isbn, card_number, mode)
}

/// Check in `isbn` from `card_number`
pub fn checkin(
    config_path: &Path,
    isbn: &str,
    card_number: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    run(config_path, Activity::CheckIn, isbn, card_number, mode)
}

fn run(
    config_path: &Path,
    activity: Activity,
    isbn: &str,
    card_number: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut library = LibraryConfig::load_from(config_path)?.build_library()?;

    let outcome = match activity {
        Activity::CheckOut => library.check_out(isbn, card_number),
        Activity::CheckIn => library.check_in(isbn, card_number),
    };

    let result = CirculationResult {
        success: outcome.is_ok(),
        activity: activity.to_string(),
        isbn: isbn.to_string(),
        card_number: card_number.to_string(),
        error: outcome.err().map(|e| e.to_string()),
    };
    result.render(mode);

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}
