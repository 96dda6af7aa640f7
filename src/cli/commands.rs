use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookgraph")]
#[command(
    author,
    version,
    about = "A small GraphQL API over in-memory books, authors and publishers"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookgraph.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start with an empty catalog instead of the built-in books
    #[arg(long, global = true)]
    pub empty: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "BOOKGRAPH_PORT")]
        port: Option<u16>,

        /// Do not serve the GraphiQL console
        #[arg(long)]
        no_graphiql: bool,

        /// Do not add CORS headers
        #[arg(long)]
        no_cors: bool,
    },

    /// Execute a GraphQL query against a fresh catalog
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}
