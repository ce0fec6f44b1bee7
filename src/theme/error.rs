use std::{io, path::PathBuf};

use thiserror::Error;

use crate::theme::ValidationErrors;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("could not read theme file \"{}\"", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse theme: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme is invalid:\n{0}")]
    Invalid(#[from] ValidationErrors),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no theme named \"{0}\" is registered")]
    UnknownTheme(String),
}
