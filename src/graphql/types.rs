use crate::model::{self, RecordId};
use crate::store::{Catalog, SharedCatalog};
use async_graphql::{Context, Object};

/// Runs `f` against the catalog stored in the schema data.
///
/// The read guard never outlives this call, so resolvers stay `Send`.
pub(super) fn with_catalog<T>(
    ctx: &Context<'_>,
    f: impl FnOnce(&Catalog) -> T,
) -> async_graphql::Result<T> {
    let shared = ctx.data::<SharedCatalog>()?;
    let catalog = shared.read()?;
    Ok(f(&catalog))
}

pub(super) fn with_catalog_mut<T>(
    ctx: &Context<'_>,
    f: impl FnOnce(&mut Catalog) -> T,
) -> async_graphql::Result<T> {
    let shared = ctx.data::<SharedCatalog>()?;
    let mut catalog = shared.write()?;
    Ok(f(&mut catalog))
}

fn into_all<M, T: From<M>>(records: Vec<M>) -> Vec<T> {
    records.into_iter().map(T::from).collect()
}

pub struct Book(model::Book);

/// This represents a book written by an author
#[Object]
impl Book {
    async fn id(&self) -> RecordId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> RecordId {
        self.0.author_id
    }

    /// Unset for books added without a publisher
    async fn publisher_id(&self) -> Option<RecordId> {
        self.0.publisher_id
    }

    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let author_id = self.0.author_id;
        with_catalog(ctx, |c| c.author(author_id).cloned().map(Author::from))
    }

    async fn publisher(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Publisher>> {
        let Some(publisher_id) = self.0.publisher_id else {
            return Ok(None);
        };
        with_catalog(ctx, |c| {
            c.publisher(publisher_id).cloned().map(Publisher::from)
        })
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self(b)
    }
}

pub struct Author(model::Author);

/// This represents an author of books
#[Object]
impl Author {
    async fn id(&self) -> RecordId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let id = self.0.id;
        with_catalog(ctx, |c| into_all(c.books_by_author(id)))
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self(a)
    }
}

pub struct Publisher(model::Publisher);

/// This represents a publisher
#[Object]
impl Publisher {
    async fn id(&self) -> RecordId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let id = self.0.id;
        with_catalog(ctx, |c| into_all(c.books_by_publisher(id)))
    }
}

impl From<model::Publisher> for Publisher {
    fn from(p: model::Publisher) -> Self {
        Self(p)
    }
}

pub(super) fn books(records: &[model::Book]) -> Vec<Book> {
    into_all(records.to_vec())
}

pub(super) fn authors(records: &[model::Author]) -> Vec<Author> {
    into_all(records.to_vec())
}

pub(super) fn publishers(records: &[model::Publisher]) -> Vec<Publisher> {
    into_all(records.to_vec())
}
