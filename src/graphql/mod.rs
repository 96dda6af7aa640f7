//! GraphQL schema, resolvers and HTTP server for the catalog.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on the same path)
//! bookgraph serve --port 5000
//!
//! # Execute a query from CLI
//! bookgraph query '{ author(id: 2) { name books { name } } }'
//!
//! # Execute a mutation from CLI
//! bookgraph mutate 'addAuthor(name: "Patrick Rothfuss") { id name }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `author`, `publisher`, `books`, `authors`, `publishers`
//! - **Mutations**: `addBook`, `addAuthor`, `addPublisher`

mod schema;
mod server;
mod types;

pub use schema::{BookgraphSchema, MutationRoot, QueryRoot, build_schema, seeded_schema};
pub use server::{router, run_server, serve};
pub use types::{Author, Book, Publisher};
