use thiserror::Error;

#[derive(Error, Debug)]
pub enum PfError {
    /// A line in a table file matched no grammar alternative. The whole
    /// parse is aborted; no partial mapping is ever returned.
    #[error("Syntax error in line '{0}'")]
    Syntax(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Command error: {0}")]
    Command(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PfError>;
