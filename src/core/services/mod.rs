//! Business rules
//!
//! Pure functions that operate on domain models. They never mutate state;
//! the [`Library`](crate::core::Library) applies their verdicts.
//!
//! - [`eligibility`] - Decide whether a check-out may proceed

pub mod eligibility;

pub use eligibility::check_out_eligibility;
