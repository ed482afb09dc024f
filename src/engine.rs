use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use tracing::{debug, trace};

use crate::entry::Entry;
use crate::results::{Results, ScanStats};
use crate::traits::{Check, Lister};

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Descent policy passed from the builder (or a free function) to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WalkConfig {
    /// Deepest directory level that may be listed. The starting directory is
    /// level 0; `Some(0)` never descends, `None` has no bound.
    pub max_depth: Option<usize>,
}

impl WalkConfig {
    pub(crate) fn single_level() -> Self {
        Self { max_depth: Some(0) }
    }

    pub(crate) fn unbounded() -> Self {
        Self { max_depth: None }
    }

    fn allows(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}

/// Convert a signed depth bound to the engine's form: any negative value
/// means unlimited.
pub(crate) fn depth_limit(max_depth: i64) -> Option<usize> {
    usize::try_from(max_depth).ok()
}

// ---------------------------------------------------------------------------
// walk()
// ---------------------------------------------------------------------------

/// Search `root` and every sub-directory the descent policy admits.
///
/// Directories are listed depth-first in pre-order, the same order a
/// recursive walk would list them, so `errors` comes out in visit order.
/// The pending-directory stack lives on the heap, so deep trees cost memory,
/// not call stack. Nothing guards against cycles: a listing that reports a
/// directory loop will be walked until memory runs out.
///
/// Result keys start from `root` with `.` components dropped, so `./x` and
/// `x` give the same keys and `.` gives bare names. The starting directory
/// is still listed, and its errors reported, under the caller's spelling.
pub(crate) fn walk(
    lister: &dyn Lister,
    root: &Path,
    config: WalkConfig,
    dir_checks: &[&dyn Check],
    checks: &[&dyn Check],
) -> Results {
    let start = Instant::now();

    let mut entries = HashMap::new();
    let mut errors = Vec::new();
    let mut stats = ScanStats::default();

    let mut pending: Vec<(PathBuf, usize)> = vec![(key_prefix(root), 0)];

    while let Some((dir, depth)) = pending.pop() {
        let listed = if depth == 0 {
            lister.list(root)
        } else {
            lister.list(&dir)
        };
        let children = match listed {
            Ok(children) => children,
            Err(e) => {
                debug!(dir = %dir.display(), depth, error = %e, "directory not readable");
                errors.push(e);
                continue;
            }
        };
        stats.dirs_read += 1;
        stats.entries_seen += children.len();

        let mut descend = Vec::new();

        for child in children {
            let path = dir.join(&child.name);
            let matched = passes_all(&child, checks);

            if child.is_dir() && should_descend(&child, depth, config, dir_checks) {
                descend.push(path.clone());
            }

            if matched {
                trace!(path = %path.display(), "matched");
                entries.insert(path, child);
            }
        }

        // Reversed so the first listed sub-directory is popped first
        pending.extend(descend.into_iter().rev().map(|p| (p, depth + 1)));
    }

    stats.duration = start.elapsed();

    Results {
        entries,
        errors,
        stats,
    }
}

/// `root` without `.` components. Empty when `root` is `.` itself.
fn key_prefix(root: &Path) -> PathBuf {
    root.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Every check passes; an empty set passes everything.
fn passes_all(entry: &Entry, checks: &[&dyn Check]) -> bool {
    checks.iter().all(|c| c.passes(entry))
}

fn should_descend(
    dir: &Entry,
    depth: usize,
    config: WalkConfig,
    dir_checks: &[&dyn Check],
) -> bool {
    if dir.name == "." || dir.name == ".." {
        return false;
    }
    if !config.allows(depth + 1) {
        trace!(name = ?dir.name, depth, "pruned by depth");
        return false;
    }
    if !passes_all(dir, dir_checks) {
        trace!(name = ?dir.name, depth, "pruned by directory checks");
        return false;
    }
    true
}
