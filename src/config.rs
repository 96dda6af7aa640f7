use crate::error::{BookgraphError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file searched for by [`BookgraphConfig::find_config_file`].
pub const CONFIG_FILE_NAME: &str = ".bookgraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookgraphConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Route serving both GraphQL requests and the console.
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_true")]
    pub graphiql: bool,

    #[serde(default = "default_true")]
    pub cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_path() -> String {
    "/graphql".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            graphiql: default_true(),
            cors: default_true(),
        }
    }
}

impl ServerSettings {
    /// `host:port`, resolved when the listener binds.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Load the built-in books, authors and publishers at startup.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            seed: default_true(),
        }
    }
}

impl BookgraphConfig {
    /// Loads configuration for a process started in `start_path`.
    ///
    /// An explicit path must exist. Without one, the nearest `.bookgraph.toml`
    /// up the directory tree is used, falling back to defaults when none exists.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(BookgraphError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                Some(p.to_path_buf())
            }
            None => Self::find_config_file(start_path),
        };

        match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "Loading config");
                Self::from_file(&p)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BookgraphConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
