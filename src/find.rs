use std::path::Path;

use crate::engine::{depth_limit, walk, WalkConfig};
use crate::error::SearchError;
use crate::lister::FsLister;
use crate::results::Results;
use crate::traits::Check;

/// List `dir` and keep the children that pass every check. Does not descend.
///
/// If `dir` cannot be listed the result is empty and `errors` holds exactly
/// that one failure.
pub fn find(dir: impl AsRef<Path>, checks: &[&dyn Check]) -> Results {
    walk(&FsLister, dir.as_ref(), WalkConfig::single_level(), &[], checks)
}

/// Like [`find`], but descends into every sub-directory.
///
/// Directories are themselves entries: they appear in the results when they
/// pass `checks`, and are descended into regardless. An unreadable
/// sub-directory adds one error and the rest of the tree is still searched.
pub fn find_recurse(dir: impl AsRef<Path>, checks: &[&dyn Check]) -> Results {
    walk(&FsLister, dir.as_ref(), WalkConfig::unbounded(), &[], checks)
}

/// Like [`find_recurse`], but a sub-directory is only descended into when it
/// passes every one of `dir_checks` and listing it would not go past
/// `max_depth`. The starting directory is depth 0; a negative `max_depth`
/// means no bound.
///
/// Pruning only limits descent. A pruned directory is still tested against
/// `checks` like any other entry.
pub fn find_recurse_prune(
    dir: impl AsRef<Path>,
    max_depth: i64,
    dir_checks: &[&dyn Check],
    checks: &[&dyn Check],
) -> Results {
    let config = WalkConfig {
        max_depth: depth_limit(max_depth),
    };
    walk(&FsLister, dir.as_ref(), config, dir_checks, checks)
}

/// Number of entries [`find`] would return, and its errors.
pub fn count(dir: impl AsRef<Path>, checks: &[&dyn Check]) -> (usize, Vec<SearchError>) {
    counted(find(dir, checks))
}

/// Number of entries [`find_recurse`] would return, and its errors.
pub fn count_recurse(dir: impl AsRef<Path>, checks: &[&dyn Check]) -> (usize, Vec<SearchError>) {
    counted(find_recurse(dir, checks))
}

/// Number of entries [`find_recurse_prune`] would return, and its errors.
pub fn count_recurse_prune(
    dir: impl AsRef<Path>,
    max_depth: i64,
    dir_checks: &[&dyn Check],
    checks: &[&dyn Check],
) -> (usize, Vec<SearchError>) {
    counted(find_recurse_prune(dir, max_depth, dir_checks, checks))
}

fn counted(results: Results) -> (usize, Vec<SearchError>) {
    (results.len(), results.errors)
}
