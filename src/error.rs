use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::gen::TemplateError;
use crate::parser::ParseError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    // vectors, prologue and output files
    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attaches the file being processed to an error.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Error::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Adds file context to any error convertible into [`Error`].
pub trait WithPath<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E: Into<Error>> WithPath<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| e.into().in_file(path))
    }
}
