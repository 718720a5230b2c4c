//! Integration tests for stacks
//!
//! These tests walk through complete circulation workflows:
//! register → check out → fees → check in


use stacks::Library;
use stacks::config::LibraryConfig;

/// Library built from the sample catalog, the same one `stacks demo` uses
fn sample() -> Library {
    LibraryConfig::sample()
        .build_library()
        .expect("sample catalog is valid")
}

#[test]
fn test_sample_catalog_matches_demo() {
    let library = sample();
    let titles: Vec<&str> = library.books().iter().map(|b| b.title()).collect();
    assert_eq!(titles, vec!["Sample Book 1", "Sample Book 2"]);

    let cards: Vec<&str> = library.patrons().iter().map(|p| p.card_number()).collect();
    assert_eq!(cards, vec!["1234", "5678"]);
    assert!(library.patrons_with_fees().is_empty());
}
