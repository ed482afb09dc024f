//! Ready-made checks for the common cases.
//!
//! Each is a small value implementing [`Check`]; combine them by passing
//! several (all must pass) and invert any of them with [`Not`].

use crate::entry::Entry;
use crate::traits::Check;

/// Passes regular files.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsRegular;

impl Check for IsRegular {
    fn passes(&self, entry: &Entry) -> bool {
        entry.is_file()
    }
}

/// Passes directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsDir;

impl Check for IsDir {
    fn passes(&self, entry: &Entry) -> bool {
        entry.is_dir()
    }
}

/// Passes symbolic links.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsSymlink;

impl Check for IsSymlink {
    fn passes(&self, entry: &Entry) -> bool {
        entry.is_symlink()
    }
}

/// Passes names starting with `.`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsHidden;

impl Check for IsHidden {
    fn passes(&self, entry: &Entry) -> bool {
        entry.is_hidden()
    }
}

#[derive(Debug, Clone)]
pub struct NameHasPrefix(pub String);

impl Check for NameHasPrefix {
    fn passes(&self, entry: &Entry) -> bool {
        entry.name_lossy().starts_with(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct NameHasSuffix(pub String);

impl Check for NameHasSuffix {
    fn passes(&self, entry: &Entry) -> bool {
        entry.name_lossy().ends_with(&self.0)
    }
}

/// Passes names containing a substring, ignoring case.
#[derive(Debug, Clone)]
pub struct NameContains {
    pattern: String,
}

impl NameContains {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
        }
    }
}

impl Check for NameContains {
    fn passes(&self, entry: &Entry) -> bool {
        entry.name_lossy().to_lowercase().contains(&self.pattern)
    }
}

/// Passes entries strictly larger than the given size in bytes.
#[derive(Debug, Clone, Copy)]
pub struct LenAbove(pub u64);

impl Check for LenAbove {
    fn passes(&self, entry: &Entry) -> bool {
        entry.len > self.0
    }
}

/// Passes entries no larger than the given size in bytes.
#[derive(Debug, Clone, Copy)]
pub struct LenAtMost(pub u64);

impl Check for LenAtMost {
    fn passes(&self, entry: &Entry) -> bool {
        entry.len <= self.0
    }
}

/// Inverts a check.
#[derive(Debug, Clone, Copy)]
pub struct Not<C>(pub C);

impl<C: Check> Check for Not<C> {
    fn passes(&self, entry: &Entry) -> bool {
        !self.0.passes(entry)
    }
}

/// Passes everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Everything;

impl Check for Everything {
    fn passes(&self, _entry: &Entry) -> bool {
        true
    }
}

/// Passes nothing. As a directory check it turns any recursive search into
/// a single-level one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nothing;

impl Check for Nothing {
    fn passes(&self, _entry: &Entry) -> bool {
        false
    }
}
