use super::{collection::Collection, seed};
use crate::{
    config::CatalogSettings,
    error::{BookgraphError, Result},
    model::{Author, Book, Publisher, RecordId},
};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The books, authors and publishers known to one process.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Collection<Book>,
    authors: Collection<Author>,
    publishers: Collection<Publisher>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A catalog holding the built-in seed data.
    pub fn seeded() -> Self {
        Self {
            books: Collection::from_records(seed::books()),
            authors: Collection::from_records(seed::authors()),
            publishers: Collection::from_records(seed::publishers()),
        }
    }

    pub fn from_settings(settings: &CatalogSettings) -> Self {
        let catalog = if settings.seed {
            Self::seeded()
        } else {
            Self::empty()
        };
        tracing::debug!(
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            publishers = catalog.publishers.len(),
            "Catalog ready"
        );
        catalog
    }

    pub fn book(&self, id: RecordId) -> Option<&Book> {
        self.books.find(id)
    }

    pub fn author(&self, id: RecordId) -> Option<&Author> {
        self.authors.find(id)
    }

    pub fn publisher(&self, id: RecordId) -> Option<&Publisher> {
        self.publishers.find(id)
    }

    pub fn books(&self) -> &[Book] {
        self.books.all()
    }

    pub fn authors(&self) -> &[Author] {
        self.authors.all()
    }

    pub fn publishers(&self) -> &[Publisher] {
        self.publishers.all()
    }

    pub fn books_by_author(&self, author_id: RecordId) -> Vec<Book> {
        self.books.filter(|b| b.is_by(author_id))
    }

    pub fn books_by_publisher(&self, publisher_id: RecordId) -> Vec<Book> {
        self.books.filter(|b| b.is_published_by(publisher_id))
    }

    /// Appends a book. Neither reference is checked against the other collections.
    pub fn add_book(
        &mut self,
        name: String,
        author_id: RecordId,
        publisher_id: Option<RecordId>,
    ) -> Book {
        let book = self
            .books
            .insert(|id| Book::new(id, name, author_id).with_publisher(publisher_id));
        tracing::info!(id = book.id, name = %book.name, author_id, "Added book");
        book
    }

    pub fn add_author(&mut self, name: String) -> Author {
        let author = self.authors.insert(|id| Author::new(id, name));
        tracing::info!(id = author.id, name = %author.name, "Added author");
        author
    }

    pub fn add_publisher(&mut self, name: String) -> Publisher {
        let publisher = self.publishers.insert(|id| Publisher::new(id, name));
        tracing::info!(id = publisher.id, name = %publisher.name, "Added publisher");
        publisher
    }
}

/// A [`Catalog`] shared between request handlers.
///
/// Appends take the write lock, so id assignment stays serialized when
/// mutations run concurrently.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>> {
        self.inner.read().map_err(|_| BookgraphError::StorePoisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>> {
        self.inner.write().map_err(|_| BookgraphError::StorePoisoned)
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_seed_sizes() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.books().len(), 8);
        assert_eq!(catalog.authors().len(), 3);
        assert_eq!(catalog.publishers().len(), 2);
    }

    #[test]
    fn test_every_seeded_id_resolves_to_itself() {
        let catalog = Catalog::seeded();
        for book in catalog.books() {
            assert_eq!(catalog.book(book.id), Some(book));
        }
        for author in catalog.authors() {
            assert_eq!(catalog.author(author.id), Some(author));
        }
        for publisher in catalog.publishers() {
            assert_eq!(catalog.publisher(publisher.id), Some(publisher));
        }
    }

    #[test]
    fn test_unknown_ids_are_absent() {
        let catalog = Catalog::seeded();
        assert!(catalog.book(99).is_none());
        assert!(catalog.author(0).is_none());
        assert!(catalog.publisher(3).is_none());
    }

    #[test]
    fn test_books_by_author() {
        let catalog = Catalog::seeded();
        assert_eq!(
            names(&catalog.books_by_author(2)),
            vec![
                "The Fellowship of the Ring",
                "The Two Towers",
                "The Return of the King"
            ]
        );
        assert!(catalog.books_by_author(42).is_empty());
    }

    #[test]
    fn test_books_by_publisher() {
        let catalog = Catalog::seeded();
        let ids: Vec<_> = catalog.books_by_publisher(1).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 8]);
    }

    #[test]
    fn test_add_author_after_seed() {
        let mut catalog = Catalog::seeded();
        let author = catalog.add_author("Patrick Rothfuss".to_string());
        assert_eq!(author, Author::new(4, "Patrick Rothfuss"));
        assert_eq!(catalog.authors().last(), Some(&author));
        assert_eq!(catalog.authors().len(), 4);
    }

    #[test]
    fn test_add_book_without_publisher() {
        let mut catalog = Catalog::seeded();
        let book = catalog.add_book("The Name of the Wind".to_string(), 4, None);
        assert_eq!(book.id, 9);
        assert_eq!(book.publisher_id, None);
        // Dangling author reference is accepted.
        assert!(catalog.author(4).is_none());
        assert_eq!(names(&catalog.books_by_author(4)), vec!["The Name of the Wind"]);
        assert!(
            !catalog
                .books_by_publisher(1)
                .iter()
                .any(|b| b.id == book.id)
        );
    }

    #[test]
    fn test_add_publisher_to_empty_catalog() {
        let mut catalog = Catalog::empty();
        let publisher = catalog.add_publisher("Gollancz".to_string());
        assert_eq!(publisher.id, 1);
        assert_eq!(catalog.publishers(), &[publisher]);
    }

    #[test]
    fn test_from_settings() {
        let seeded = Catalog::from_settings(&CatalogSettings { seed: true });
        assert_eq!(seeded.books().len(), 8);
        let empty = Catalog::from_settings(&CatalogSettings { seed: false });
        assert!(empty.books().is_empty());
    }

    #[test]
    fn test_shared_catalog_concurrent_appends() {
        let shared = SharedCatalog::new(Catalog::seeded());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    shared
                        .write()
                        .unwrap()
                        .add_author(format!("Author {}", i))
                        .id
                })
            })
            .collect();

        let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (4..12).collect::<Vec<_>>());
        assert_eq!(shared.read().unwrap().authors().len(), 11);
    }
}
