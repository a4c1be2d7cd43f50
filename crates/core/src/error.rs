use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::ConfigError;
use crate::parsers::ParserError;

/// Fatal errors raised while regenerating docs. Any of these aborts the run.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParserError,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl DocsError {
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        DocsError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: impl AsRef<Path>, source: ParserError) -> Self {
        DocsError::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
