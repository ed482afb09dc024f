use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::entry::Entry;
use crate::error::SearchError;
use crate::traits::Lister;

/// Lists real directories.
///
/// Walks exactly one level with every filter switched off: hidden entries
/// and ignore files are not special. The listed directory itself may be
/// reached through a symbolic link, but links among its children are never
/// followed, so each [`Entry`] describes the link itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl Lister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, SearchError> {
        let target = resolve_dir(dir)?;

        let mut builder = WalkBuilder::new(&target);
        builder
            .standard_filters(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .max_depth(Some(1));

        let mut entries = Vec::new();

        for res in builder.build() {
            let dent = res.map_err(|e| map_ignore_error(dir, e))?;

            // The walk yields the directory itself first
            if dent.depth() == 0 {
                if !dent.file_type().is_some_and(|ft| ft.is_dir()) {
                    return Err(SearchError::NotADirectory {
                        path: dir.to_path_buf(),
                    });
                }
                continue;
            }

            let Some(metadata) = child_metadata(dir, dent.metadata())? else {
                trace!(dir = %dir.display(), name = ?dent.file_name(), "entry vanished while listing");
                continue;
            };
            entries.push(Entry::from_metadata(dent.file_name(), &metadata));
        }

        debug!(dir = %dir.display(), entries = entries.len(), "listed directory");
        Ok(entries)
    }
}

/// The path to hand the walker: `dir` itself, or its resolved target when
/// `dir` is a link to a directory.
fn resolve_dir(dir: &Path) -> Result<PathBuf, SearchError> {
    let followed = fs::metadata(dir).map_err(|e| SearchError::read_dir(dir, e))?;
    if !followed.is_dir() {
        return Err(SearchError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let is_link = fs::symlink_metadata(dir)
        .map_err(|e| SearchError::read_dir(dir, e))?
        .file_type()
        .is_symlink();
    if is_link {
        fs::canonicalize(dir).map_err(|e| SearchError::read_dir(dir, e))
    } else {
        Ok(dir.to_path_buf())
    }
}

/// A child removed between the directory read and its `lstat` is skipped.
/// Any other metadata failure fails the whole directory.
fn child_metadata(
    dir: &Path,
    res: Result<Metadata, ignore::Error>,
) -> Result<Option<Metadata>, SearchError> {
    match res {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if e.io_error().is_some_and(|io| io.kind() == io::ErrorKind::NotFound) => Ok(None),
        Err(e) => Err(map_ignore_error(dir, e)),
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to SearchError
// ---------------------------------------------------------------------------

/// Every failure is charged to the directory being listed, whatever path the
/// walker attached to it.
fn map_ignore_error(dir: &Path, e: ignore::Error) -> SearchError {
    let message = e.to_string();
    match e.into_io_error() {
        Some(io_err) => SearchError::read_dir(dir, io_err),
        None => SearchError::Io {
            path: dir.to_path_buf(),
            source: io::Error::other(message),
        },
    }
}
