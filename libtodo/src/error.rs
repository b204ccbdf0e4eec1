//! Error types for libtodo
//!
//! The state engine itself never fails; these cover the edges around it
//! (configuration loading, host input).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TodoError>;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Script error at line {line}: {message}")]
    Script { line: usize, message: String },
}

impl TodoError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TodoError::Script { .. } => 3,
            TodoError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
