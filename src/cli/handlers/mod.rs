mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeOptions, handle_serve};

use crate::config::BookgraphConfig;
use crate::graphql::{BookgraphSchema, build_schema};
use crate::store::Catalog;
use anyhow::{Result, bail};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookgraphConfig,
}

impl CommandContext {
    pub fn new(config: BookgraphConfig) -> Self {
        Self { config }
    }

    pub fn schema(&self) -> BookgraphSchema {
        build_schema(Catalog::from_settings(&self.config.catalog))
    }
}

/// Executes `document` on a fresh schema and prints the JSON response.
///
/// The response is printed even when it carries errors; the error count is
/// then reported as a failure so the process exits non-zero.
pub(crate) fn execute_and_print(
    ctx: &CommandContext,
    document: &str,
    variables: Option<String>,
) -> Result<()> {
    let schema = ctx.schema();

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        bail!("GraphQL response contained {} error(s)", response.errors.len());
    }
    Ok(())
}
