//! Command implementations

mod catalog;
mod circulation;
mod demo;
mod init;

pub use catalog::{books, patrons};
pub use circulation::{checkin, checkout};
pub use demo::demo;
pub use init::init;
