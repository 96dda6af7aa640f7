//! Data models for the catalog.
//!
//! - [`Book`]: a book, pointing at its author and (optionally) its publisher
//! - [`Author`]: a person who writes books
//! - [`Publisher`]: a house that publishes books
//!
//! Relations are never stored on the parent side; an author's books are found
//! by scanning the books for a matching `author_id`.

mod author;
mod book;
mod publisher;

pub use author::Author;
pub use book::Book;
pub use publisher::Publisher;

/// Numeric identifier shared by every record kind.
pub type RecordId = i32;

/// A record stored in a [`Collection`](crate::store::Collection).
pub trait Record: Clone {
    fn id(&self) -> RecordId;
}
