//! # dirsearch
//!
//! Search a directory tree for the entries that pass a set of checks.
//!
//! Start from a directory, list it, keep each entry that passes every item
//! [`Check`], and optionally descend into sub-directories, bounded by a depth
//! limit and by directory checks. Directories that cannot be read are
//! reported alongside the results instead of ending the search, so a single
//! unreadable corner of a tree costs only that corner.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dirsearch::checks::{IsHidden, IsRegular, LenAbove, Not};
//! use dirsearch::Check;
//!
//! // Non-empty regular files anywhere below `data`, skipping hidden directories
//! let (non_empty, not_hidden) = (LenAbove(0), Not(IsHidden));
//! let checks: [&dyn Check; 2] = [&non_empty, &IsRegular];
//! let dir_checks: [&dyn Check; 1] = [&not_hidden];
//! let results = dirsearch::find_recurse_prune("data", -1, &dir_checks, &checks);
//!
//! for (path, entry) in &results.entries {
//!     println!("{} ({} bytes)", path.display(), entry.len);
//! }
//! for err in &results.errors {
//!     eprintln!("skipped {}: {err}", err.path().display());
//! }
//! ```
//!
//! # Operations
//!
//! | Function               | Descends                              |
//! |------------------------|---------------------------------------|
//! | [`find`]               | never                                 |
//! | [`find_recurse`]       | into every sub-directory              |
//! | [`find_recurse_prune`] | within a depth bound and `dir_checks` |
//!
//! Each has a `count*` twin that returns only the number of matches and the
//! errors. [`search()`] offers the same engine through a builder and accepts
//! a custom [`Lister`] in place of the file system.
//!
//! # Symbolic links
//!
//! Links found inside the tree are never followed. A link to a directory is
//! an [`EntryKind::Symlink`] entry and is not descended into. The starting
//! directory itself may be a link; it is listed through.
//!
//! # Limits
//!
//! There is no cycle detection and no artificial depth limit. The walk keeps
//! its pending directories on the heap, so the practical bound is memory.

#![forbid(unsafe_code)]

pub mod checks;

mod builder;
mod engine;
mod entry;
mod error;
mod find;
mod lister;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use entry::{Entry, EntryKind};
pub use error::SearchError;
pub use find::{count, count_recurse, count_recurse_prune, find, find_recurse, find_recurse_prune};
pub use lister::FsLister;
pub use results::{Results, ScanStats};
pub use traits::{Check, Lister};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] rooted at `dir`.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use dirsearch::{Entry, EntryKind, Lister, SearchError};
///
/// struct OneFile;
///
/// impl Lister for OneFile {
///     fn list(&self, _dir: &Path) -> Result<Vec<Entry>, SearchError> {
///         Ok(vec![
///             Entry::new("invoice.txt", EntryKind::File, 12),
///             Entry::new("report.txt", EntryKind::File, 0),
///         ])
///     }
/// }
///
/// let results = dirsearch::search("root")
///     .lister(OneFile)
///     .check(|e: &Entry| e.len > 0)
///     .run();
///
/// assert_eq!(results.len(), 1);
/// assert!(results.entries.contains_key(Path::new("root/invoice.txt")));
/// ```
pub fn search<'a>(dir: impl Into<std::path::PathBuf>) -> SearchBuilder<'a> {
    SearchBuilder::new(dir)
}
