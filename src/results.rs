use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::entry::Entry;
use crate::error::SearchError;

/// The output of a completed search.
///
/// Both halves are always meaningful: a search can return entries and
/// errors at the same time when part of the tree was unreadable.
#[derive(Debug)]
pub struct Results {
    /// Every entry that passed all item checks, keyed by its full path
    /// (the starting directory joined with each name on the way down).
    pub entries: HashMap<PathBuf, Entry>,

    /// One error per directory that could not be listed, in the order the
    /// directories were visited.
    pub errors: Vec<SearchError>,

    /// Scan statistics.
    pub stats: ScanStats,
}

impl Results {
    /// Number of matching entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when every visited directory was listed without error.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Paths of matching entries, in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }

    /// Split into the entry map and the error sequence.
    pub fn into_parts(self) -> (HashMap<PathBuf, Entry>, Vec<SearchError>) {
        (self.entries, self.errors)
    }
}

/// Statistics for a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Directories listed successfully.
    pub dirs_read: usize,

    /// Entries examined across all listed directories, matched or not.
    pub entries_seen: usize,

    /// Wall-clock time from search start to completion.
    pub duration: Duration,
}
