//! Book report library
//!
//! Builds the book record, derives its discounted price, and renders the
//! report line printed by the `book-report` binary.

pub mod modules;

pub use modules::books::error::BookError;
pub use modules::books::models::{BookRecord, BoundedText};
pub use modules::register_all;
