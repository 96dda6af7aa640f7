use anyhow::{Context, Result};
use clap::Parser;

use bookgraph::cli::handlers::{
    CommandContext, ServeOptions, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookgraph::cli::{Cli, Commands};
use bookgraph::config::BookgraphConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = bookgraph::logging::init(cli.verbose, cli.log_file.clone());

    let mut config = load_config(&cli)?;
    if cli.empty {
        config.catalog.seed = false;
    }
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
            no_cors,
        } => handle_serve(
            ctx,
            ServeOptions {
                host,
                port,
                no_graphiql,
                no_cors,
            },
        ),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}

fn load_config(cli: &Cli) -> Result<BookgraphConfig> {
    let cwd = std::env::current_dir()?;
    BookgraphConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load bookgraph configuration")
}
