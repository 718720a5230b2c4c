//! Core domain logic for stacks
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Book, Patron, Transaction, Genre, Policy)
//! - `services/` - Stateless rules applied by the library
//! - `library` - The aggregate root; the only mutator of the domain
//! - `shared` - Thread-safe handle for multiple callers

mod error;
mod library;
mod shared;

pub mod models;
pub mod services;

pub use error::{EntityKind, LibraryError};
pub use library::Library;
pub use shared::SharedLibrary;
