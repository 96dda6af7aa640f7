//! # Bookgraph - a GraphQL API over in-memory books
//!
//! Bookgraph serves three small record collections (books, authors and
//! publishers) through a GraphQL schema with relational lookups and
//! append-only create mutations. Everything lives in process memory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:5000/graphql (GraphiQL on the same path)
//! bookgraph serve
//!
//! # One-off query against the seed data
//! bookgraph query '{ author(id: 2) { books { name } } }'
//!
//! # Print the schema
//! bookgraph schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Record types (Book, Author, Publisher)
//! - [`store`]: In-memory collections and seed data

/// Command-line interface using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.bookgraph.toml` files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookgraphError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and server.
pub mod graphql;

pub mod logging;

/// Record types for books, authors and publishers.
pub mod model;

/// In-memory storage.
pub mod store;
