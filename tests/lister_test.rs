use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use dirsearch::checks::{IsRegular, Nothing};
use dirsearch::{search, Entry, EntryKind, Lister, SearchError};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// An in-memory tree. Directories not registered fail with `NotFound`.
/// Records every directory it is asked to list, in order.
#[derive(Default)]
struct MemoryLister {
    dirs:   HashMap<PathBuf, Result<Vec<Entry>, io::ErrorKind>>,
    listed: RefCell<Vec<PathBuf>>,
}

impl MemoryLister {
    fn dir(mut self, path: &str, entries: Vec<Entry>) -> Self {
        self.dirs.insert(PathBuf::from(path), Ok(entries));
        self
    }

    fn failing(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.dirs.insert(PathBuf::from(path), Err(kind));
        self
    }

    fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }
}

impl Lister for MemoryLister {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, SearchError> {
        self.listed.borrow_mut().push(dir.to_path_buf());
        match self.dirs.get(dir) {
            Some(Ok(entries)) => Ok(entries.clone()),
            Some(Err(kind)) => Err(SearchError::read_dir(dir, io::Error::from(*kind))),
            None => Err(SearchError::read_dir(dir, io::Error::from(io::ErrorKind::NotFound))),
        }
    }
}

fn file(name: &str, len: u64) -> Entry {
    Entry::new(name, EntryKind::File, len)
}

fn dir(name: &str) -> Entry {
    Entry::new(name, EntryKind::Dir, 4096)
}

fn p(s: &str) -> PathBuf {
    s.split('/').collect()
}

/// Structure:
/// ```text
/// root/
///   a
///   open/
///     b
///   locked/      (permission denied)
///   other/
///     c
/// ```
fn partially_locked() -> MemoryLister {
    MemoryLister::default()
        .dir("root", vec![file("a", 1), dir("open"), dir("locked"), dir("other")])
        .dir("root/open", vec![file("b", 2)])
        .failing("root/locked", io::ErrorKind::PermissionDenied)
        .dir("root/other", vec![file("c", 3)])
}

// ---------------------------------------------------------------------------
// Partial failure
// ---------------------------------------------------------------------------

#[test]
fn denied_subdir_is_one_error() {
    let lister = partially_locked();

    let results = search("root").recursive(true).lister(&lister).run();

    let mut found: Vec<_> = results.paths().cloned().collect();
    found.sort();
    assert_eq!(
        found,
        vec![
            p("root/a"),
            p("root/locked"),
            p("root/open"),
            p("root/open/b"),
            p("root/other"),
            p("root/other/c"),
        ]
    );

    assert_eq!(results.errors.len(), 1);
    assert!(matches!(results.errors[0], SearchError::PermissionDenied { .. }));
    assert_eq!(results.errors[0].path(), p("root/locked").as_path());
    assert_eq!(
        results.errors[0].io_error().map(|e| e.kind()),
        Some(io::ErrorKind::PermissionDenied)
    );
}

#[test]
fn unreadable_root_yields_nothing_else() {
    let lister = MemoryLister::default().failing("root", io::ErrorKind::PermissionDenied);

    let results = search("root").recursive(true).lister(&lister).run();

    assert!(results.is_empty());
    assert_eq!(results.errors.len(), 1);
    assert_eq!(results.errors[0].path(), p("root").as_path());
    assert_eq!(results.stats.dirs_read, 0);
}

#[test]
fn errors_follow_visit_order() {
    let lister = MemoryLister::default()
        .dir("root", vec![dir("x"), dir("y")])
        .dir("root/x", vec![dir("x1"), dir("x2")])
        .failing("root/x/x1", io::ErrorKind::PermissionDenied)
        .failing("root/x/x2", io::ErrorKind::Other)
        .failing("root/y", io::ErrorKind::PermissionDenied);

    let results = search("root").recursive(true).lister(&lister).run();

    let order: Vec<PathBuf> = results.errors.iter().map(|e| e.path().to_path_buf()).collect();
    assert_eq!(order, vec![p("root/x/x1"), p("root/x/x2"), p("root/y")]);
    assert!(matches!(results.errors[1], SearchError::Io { .. }));
    assert_eq!(
        lister.listed(),
        vec![p("root"), p("root/x"), p("root/x/x1"), p("root/x/x2"), p("root/y")]
    );
}

#[test]
fn item_checks_run_before_dir_checks() {
    let log = RefCell::new(Vec::new());
    let lister = MemoryLister::default()
        .dir("root", vec![file("a", 1), dir("sub")])
        .dir("root/sub", vec![]);

    search("root")
        .recursive(true)
        .check(|e: &Entry| {
            log.borrow_mut().push(format!("item {}", e.name_lossy()));
            true
        })
        .dir_check(|e: &Entry| {
            log.borrow_mut().push(format!("dir {}", e.name_lossy()));
            true
        })
        .lister(&lister)
        .run();

    assert_eq!(log.into_inner(), vec!["item a", "item sub", "dir sub"]);
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

#[test]
fn leading_dot_components_are_dropped_from_keys() {
    let lister = MemoryLister::default()
        .dir("./root", vec![file("a", 1), dir("sub")])
        .dir("root/sub", vec![file("b", 1)]);

    let results = search("./root").recursive(true).lister(&lister).run();

    assert!(results.is_complete(), "errors: {:?}", results.errors);
    let mut found: Vec<_> = results.paths().cloned().collect();
    found.sort();
    assert_eq!(found, vec![p("root/a"), p("root/sub"), p("root/sub/b")]);
    assert_eq!(lister.listed(), vec![PathBuf::from("./root"), p("root/sub")]);
}

#[test]
fn current_dir_root_gives_bare_names() {
    let lister = MemoryLister::default()
        .dir(".", vec![file("a", 1), dir("sub")])
        .dir("sub", vec![file("b", 1)]);

    let results = search(".").recursive(true).lister(&lister).run();

    assert!(results.is_complete(), "errors: {:?}", results.errors);
    let mut found: Vec<_> = results.paths().cloned().collect();
    found.sort();
    assert_eq!(found, vec![p("a"), p("sub"), p("sub/b")]);
}

#[test]
fn root_errors_keep_callers_spelling() {
    let lister = MemoryLister::default();

    let results = search("./gone").lister(&lister).run();

    assert_eq!(results.errors.len(), 1);
    assert_eq!(results.errors[0].path(), Path::new("./gone"));
}

// ---------------------------------------------------------------------------
// Descent policy
// ---------------------------------------------------------------------------

#[test]
fn dot_entries_are_never_descended() {
    let lister = MemoryLister::default()
        .dir("root", vec![dir("."), dir(".."), dir("sub")])
        .dir("root/sub", vec![dir("."), dir(".."), file("f", 1)]);

    let results = search("root").recursive(true).lister(&lister).run();

    assert!(results.is_complete(), "errors: {:?}", results.errors);
    assert_eq!(lister.listed(), vec![p("root"), p("root/sub")]);
    // Still entries in their own right
    assert!(results.entries.contains_key(&p("root/..")));
    assert!(results.entries.contains_key(&p("root/sub/f")));
}

#[test]
fn depth_bound_counts_from_root() {
    let chain = || {
        MemoryLister::default()
            .dir("root", vec![dir("d1")])
            .dir("root/d1", vec![dir("d2")])
            .dir("root/d1/d2", vec![dir("d3")])
            .dir("root/d1/d2/d3", vec![file("f", 1)])
    };

    let lister = chain();
    let (n, errs) = search("root").recursive(true).max_depth(2).lister(&lister).count();
    assert_eq!((n, errs.len()), (3, 0));
    assert_eq!(lister.listed().len(), 3);

    let lister = chain();
    let (n, _) = search("root").recursive(true).max_depth(1).lister(&lister).count();
    assert_eq!(n, 2);

    let lister = chain();
    let (n, _) = search("root").recursive(true).lister(&lister).count();
    assert_eq!(n, 4);
}

#[test]
fn dir_checks_only_see_directories() {
    let seen = RefCell::new(Vec::new());
    let lister = MemoryLister::default()
        .dir("root", vec![file("a", 1), dir("sub")])
        .dir("root/sub", vec![file("b", 1)]);

    let results = search("root")
        .recursive(true)
        .dir_check(|e: &Entry| {
            seen.borrow_mut().push(e.name.clone());
            true
        })
        .check(IsRegular)
        .lister(&lister)
        .run();

    assert_eq!(seen.into_inner(), vec![OsString::from("sub")]);
    assert_eq!(results.len(), 2);
}

#[test]
fn symlinks_are_not_descended() {
    let lister = MemoryLister::default()
        .dir("root", vec![Entry::new("link", EntryKind::Symlink, 8)]);

    let results = search("root").recursive(true).lister(&lister).run();

    assert_eq!(results.len(), 1);
    assert_eq!(lister.listed(), vec![p("root")]);
}

#[test]
fn rejecting_dir_check_stops_all_descent() {
    let lister = partially_locked();

    let results = search("root")
        .recursive(true)
        .dir_check(Nothing)
        .lister(&lister)
        .run();

    assert!(results.is_complete());
    assert_eq!(results.len(), 4);
    assert_eq!(lister.listed(), vec![p("root")]);
}
