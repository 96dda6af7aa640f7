use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{MethodRouter, post},
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use super::BookgraphSchema;
use crate::config::ServerSettings;
use crate::error::{BookgraphError, Result};

async fn graphql_handler(
    State(schema): State<BookgraphSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    tracing::debug!(operation = ?request.operation_name, "Executing GraphQL request");
    let response = schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request failed");
    }
    response.into()
}

/// Builds the router serving `settings.path`.
///
/// `POST` executes requests. `GET` serves the GraphiQL console when enabled,
/// otherwise it executes queries passed in the query string.
pub fn router(schema: BookgraphSchema, settings: &ServerSettings) -> Router {
    let route: MethodRouter<BookgraphSchema> = if settings.graphiql {
        let page = GraphiQLSource::build().endpoint(&settings.path).finish();
        post(graphql_handler).get(move || {
            let page = page.clone();
            async move { Html(page) }
        })
    } else {
        post(graphql_handler).get(graphql_handler)
    };

    let app = Router::new().route(&settings.path, route).with_state(schema);

    if settings.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Serves `schema` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    schema: BookgraphSchema,
    settings: &ServerSettings,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(schema, settings))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| BookgraphError::Server(e.to_string()))
}

/// Binds `settings.host:settings.port` and serves until Ctrl-C.
pub async fn run_server(schema: BookgraphSchema, settings: &ServerSettings) -> Result<()> {
    let address = settings.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| BookgraphError::Server(format!("Failed to bind {}: {}", address, e)))?;
    let addr = listener.local_addr()?;

    tracing::info!(
        %addr,
        path = %settings.path,
        graphiql = settings.graphiql,
        "GraphQL server listening"
    );

    serve(listener, schema, settings, shutdown_signal()).await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
