use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrganizerError>;

#[derive(Debug, Error)]
pub enum OrganizerError {
    /// A required field was empty once trimmed. Nothing was written.
    #[error("{0}")]
    Validation(&'static str),

    #[error("A playlist named \"{0}\" already exists.")]
    DuplicatePlaylist(String),

    #[error("Could not locate a home directory for application data.")]
    UnrecognisedHomeDir,

    #[error("Could not create {0:?}: {1}")]
    DirectoryNotFound(PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Sql(#[from] rusqlite::Error),
}

impl OrganizerError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
