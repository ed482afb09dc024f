use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A directory that could not be listed.
///
/// Every variant names the directory. A failure on the starting directory
/// leaves the search with no entries at all; a failure anywhere below it is
/// one entry in [`Results::errors`](crate::Results::errors) and the walk goes on.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no such file or directory: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SearchError {
    /// Classify an I/O failure from reading the directory at `path`.
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// The directory this error occurred at.
    /// Callers use this to present "Skipped: <path>" without matching on variants.
    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied { path, .. }
            | Self::NotFound { path, .. }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => path,
        }
    }

    /// The underlying OS error, if there was one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::PermissionDenied { source, .. }
            | Self::NotFound { source, .. }
            | Self::Io { source, .. } => Some(source),
            Self::NotADirectory { .. } => None,
        }
    }
}
