use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use crate::config::ServerSettings;
use crate::graphql::run_server;

pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
    pub no_cors: bool,
}

impl ServeOptions {
    /// Layers command-line flags over the configured server settings.
    ///
    /// The `no_*` flags can only switch a feature off.
    pub fn apply(self, mut settings: ServerSettings) -> ServerSettings {
        if let Some(host) = self.host {
            settings.host = host;
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        settings.graphiql &= !self.no_graphiql;
        settings.cors &= !self.no_cors;
        settings
    }
}

pub fn handle_serve(ctx: CommandContext, options: ServeOptions) -> Result<()> {
    let settings = options.apply(ctx.config.server.clone());
    let schema = ctx.schema();
    let url = format!("http://{}:{}{}", settings.host, settings.port, settings.path);

    println!("{} GraphQL server on {}", "Starting".green(), url.cyan());
    if settings.graphiql {
        println!("GraphiQL console: {}", url.cyan());
    }

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, &settings))
        .context("GraphQL server failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_flags() -> ServeOptions {
        ServeOptions {
            host: None,
            port: None,
            no_graphiql: false,
            no_cors: false,
        }
    }

    fn from_file() -> ServerSettings {
        ServerSettings {
            host: "10.0.0.1".to_string(),
            port: 8080,
            path: "/api".to_string(),
            graphiql: true,
            cors: true,
        }
    }

    #[test]
    fn test_no_flags_keeps_file_settings() {
        assert_eq!(no_flags().apply(from_file()), from_file());
    }

    #[test]
    fn test_host_and_port_override_file() {
        let options = ServeOptions {
            host: Some("0.0.0.0".to_string()),
            port: Some(9000),
            ..no_flags()
        };
        let settings = options.apply(from_file());
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.path, "/api");
    }

    #[test]
    fn test_no_flags_switch_features_off() {
        let options = ServeOptions {
            no_graphiql: true,
            no_cors: true,
            ..no_flags()
        };
        let settings = options.apply(from_file());
        assert!(!settings.graphiql);
        assert!(!settings.cors);
    }

    #[test]
    fn test_unset_no_flags_do_not_reenable() {
        let file = ServerSettings {
            graphiql: false,
            cors: false,
            ..from_file()
        };
        let settings = no_flags().apply(file);
        assert!(!settings.graphiql);
        assert!(!settings.cors);
    }
}
