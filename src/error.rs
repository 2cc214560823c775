use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while loading, saving or collecting recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// A stored recipe line contains a token that is not an ingredient id
    #[error("Malformed recipe line {line:?}: {token:?} is not an ingredient id")]
    MalformedLine {
        line: String,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// Reading or writing the recipes file, or the console, failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
