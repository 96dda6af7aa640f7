use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookgraphError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Catalog lock poisoned by a panicked writer")]
    StorePoisoned,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BookgraphError>;
