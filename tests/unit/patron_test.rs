//! Tests for the patron model

use std::collections::HashSet;

use stacks::core::models::Patron;

use crate::common::{PatronBuilder, patron1, patron2};

#[test]
fn test_accessors() {
    let patron = Patron::new("User 1", "1234");
    assert_eq!(patron.name(), "User 1");
    assert_eq!(patron.card_number(), "1234");
    assert_eq!(patron.owed_fees(), 0);
}

#[test]
fn test_owes_fees_tracks_latest_balance() {
    let mut patron = PatronBuilder::new().fees(10).build();
    assert!(patron.owes_fees());

    patron.set_fees(0);
    assert!(!patron.owes_fees());

    patron.set_fees(1);
    assert!(patron.owes_fees());
}

#[test]
fn test_equality_by_card_number() {
    let a = PatronBuilder::new().name("A").card("42").build();
    let b = PatronBuilder::new().name("B").card("42").fees(9).build();
    let c = PatronBuilder::new().name("A").card("43").build();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_hash_follows_card_number() {
    let mut set = HashSet::new();
    set.insert(patron1());
    set.insert(PatronBuilder::new().name("Someone Else").card("1234").fees(3).build());
    set.insert(patron2());
    assert_eq!(set.len(), 2);
}
