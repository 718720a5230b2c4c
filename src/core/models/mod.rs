//! Domain models for stacks
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Book`] - A bibliographic record that can be lent out
//! - [`Genre`] - Shelf classification of a book
//! - [`Patron`] - A registered borrower with a fee balance
//! - [`Transaction`] - "This book went out / came back with this patron"
//! - [`CirculationPolicy`] - Tunable lending rules

mod book;
mod genre;
mod patron;
mod policy;
mod transaction;

pub use book::Book;
pub use genre::Genre;
pub use patron::Patron;
pub use policy::CirculationPolicy;
pub use transaction::{Activity, Transaction};
