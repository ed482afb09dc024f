use std::path::Path;

use crate::entry::Entry;
use crate::error::SearchError;

/// A pass/fail test over one entry.
///
/// Used both as an item check (does this entry go into the results?) and as
/// a directory check (may the search descend into this sub-directory?).
/// Checks must be free of side effects: the engine calls them left to right
/// and stops at the first failure, and that order is not part of the contract.
///
/// Any `Fn(&Entry) -> bool` is a check:
///
/// ```rust
/// use dirsearch::{Check, Entry, EntryKind};
///
/// let non_empty = |e: &Entry| e.len > 0;
/// assert!(non_empty.passes(&Entry::new("a", EntryKind::File, 3)));
/// ```
///
/// Implement it directly for reusable checks:
///
/// ```rust
/// use dirsearch::{Check, Entry};
///
/// struct ExtensionCheck(String);
///
/// impl Check for ExtensionCheck {
///     fn passes(&self, entry: &Entry) -> bool {
///         entry
///             .extension()
///             .map(|e| e.eq_ignore_ascii_case(&self.0))
///             .unwrap_or(false)
///     }
/// }
/// ```
pub trait Check {
    /// Returns `true` if the entry passes.
    fn passes(&self, entry: &Entry) -> bool;
}

impl<F> Check for F
where
    F: Fn(&Entry) -> bool,
{
    fn passes(&self, entry: &Entry) -> bool {
        self(entry)
    }
}

/// Lists the immediate children of one directory.
///
/// This is the only place the search touches the file system. The default,
/// [`FsLister`](crate::FsLister), reads the real disk; implement this to
/// search in-memory trees, archives, or virtual file systems.
///
/// # Contract
///
/// - Return every child, in any order, without `.` or `..`.
/// - Report metadata without following symbolic links.
/// - Fail with a [`SearchError`] naming `dir` when it cannot be opened, is not
///   a directory, or cannot be fully read. A failure means the directory
///   contributes nothing; partial listings are not returned.
pub trait Lister {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, SearchError>;
}

impl<L: Lister + ?Sized> Lister for &L {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, SearchError> {
        (**self).list(dir)
    }
}
