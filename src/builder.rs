use std::path::PathBuf;

use crate::engine::{walk, WalkConfig};
use crate::error::SearchError;
use crate::lister::FsLister;
use crate::results::Results;
use crate::traits::{Check, Lister};

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Configures and runs one search.
///
/// Created via [`dirsearch::search()`](crate::search). Without further
/// configuration it lists the starting directory only, keeps every entry and
/// reads the real file system.
///
/// # Example
///
/// ```rust,no_run
/// use dirsearch::checks::{IsHidden, IsRegular, Not};
///
/// let results = dirsearch::search("src")
///     .check(IsRegular)
///     .recursive(true)
///     .dir_check(Not(IsHidden))
///     .max_depth(3)
///     .run();
///
/// for path in results.paths() {
///     println!("{}", path.display());
/// }
/// for err in &results.errors {
///     eprintln!("skipped: {err}");
/// }
/// ```
pub struct SearchBuilder<'a> {
    root:       PathBuf,
    checks:     Vec<Box<dyn Check + 'a>>,
    dir_checks: Vec<Box<dyn Check + 'a>>,
    recursive:  bool,
    max_depth:  Option<usize>,
    lister:     Box<dyn Lister + 'a>,
}

impl<'a> SearchBuilder<'a> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:       root.into(),
            checks:     Vec::new(),
            dir_checks: Vec::new(),
            recursive:  false,
            max_depth:  None,
            lister:     Box::new(FsLister),
        }
    }

    // ── Checks ────────────────────────────────────────────────────────────

    /// Add an item check. An entry is kept only if every item check passes.
    ///
    /// Directories are tested like any other entry; this does not affect
    /// which directories are descended into.
    pub fn check(mut self, c: impl Check + 'a) -> Self {
        self.checks.push(Box::new(c));
        self
    }

    /// Add a directory check. A sub-directory is descended into only if
    /// every directory check passes. Ignored unless the search is recursive.
    pub fn dir_check(mut self, c: impl Check + 'a) -> Self {
        self.dir_checks.push(Box::new(c));
        self
    }

    // ── Descent ───────────────────────────────────────────────────────────

    /// Descend into sub-directories. Off by default.
    pub fn recursive(mut self, yes: bool) -> Self {
        self.recursive = yes;
        self
    }

    /// Deepest directory level to list in a recursive search. `0` is the
    /// starting directory only, `1` adds its sub-directories, and so on.
    /// Unlimited by default.
    pub fn max_depth(mut self, d: usize) -> Self {
        self.max_depth = Some(d);
        self
    }

    // ── Source ────────────────────────────────────────────────────────────

    /// Replace the file-system lister.
    pub fn lister(mut self, l: impl Lister + 'a) -> Self {
        self.lister = Box::new(l);
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Run the search.
    ///
    /// Never fails outright. Directories that cannot be listed, including the
    /// starting directory, are reported in [`Results::errors`].
    pub fn run(self) -> Results {
        let config = if self.recursive {
            WalkConfig {
                max_depth: self.max_depth,
            }
        } else {
            WalkConfig::single_level()
        };

        let checks: Vec<&dyn Check> = self
            .checks
            .iter()
            .map(|c| c.as_ref() as &dyn Check)
            .collect();
        let dir_checks: Vec<&dyn Check> = self
            .dir_checks
            .iter()
            .map(|c| c.as_ref() as &dyn Check)
            .collect();

        walk(self.lister.as_ref(), &self.root, config, &dir_checks, &checks)
    }

    /// Run the search, keeping only the number of matches and the errors.
    pub fn count(self) -> (usize, Vec<SearchError>) {
        let results = self.run();
        (results.entries.len(), results.errors)
    }
}
