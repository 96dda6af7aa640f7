use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::model::RecordId;
use crate::store::{Catalog, SharedCatalog};

use super::types::{self, Author, Book, Publisher, with_catalog, with_catalog_mut};

pub type BookgraphSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(catalog: impl Into<SharedCatalog>) -> BookgraphSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog.into())
        .finish()
}

/// Schema over a freshly seeded catalog.
pub fn seeded_schema() -> BookgraphSchema {
    build_schema(Catalog::seeded())
}

pub struct QueryRoot;

/// Root Query
#[Object]
impl QueryRoot {
    /// Get book
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<RecordId>,
    ) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else { return Ok(None) };
        with_catalog(ctx, |c| c.book(id).cloned().map(Book::from))
    }

    /// Get author
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<RecordId>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else { return Ok(None) };
        with_catalog(ctx, |c| c.author(id).cloned().map(Author::from))
    }

    /// Get publisher
    async fn publisher(
        &self,
        ctx: &Context<'_>,
        id: Option<RecordId>,
    ) -> async_graphql::Result<Option<Publisher>> {
        let Some(id) = id else { return Ok(None) };
        with_catalog(ctx, |c| c.publisher(id).cloned().map(Publisher::from))
    }

    /// Get all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        with_catalog(ctx, |c| types::books(c.books()))
    }

    /// Get all authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        with_catalog(ctx, |c| types::authors(c.authors()))
    }

    /// Get all publishers
    async fn publishers(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Publisher>> {
        with_catalog(ctx, |c| types::publishers(c.publishers()))
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: RecordId,
        publisher_id: Option<RecordId>,
    ) -> async_graphql::Result<Book> {
        with_catalog_mut(ctx, |c| c.add_book(name, author_id, publisher_id).into())
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        with_catalog_mut(ctx, |c| c.add_author(name).into())
    }

    /// Add a publisher
    async fn add_publisher(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Publisher> {
        with_catalog_mut(ctx, |c| c.add_publisher(name).into())
    }
}
