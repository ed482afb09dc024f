use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

/// One child of a listed directory.
///
/// Built from metadata obtained without following symbolic links, so a
/// symlink to a directory is a [`EntryKind::Symlink`], not a
/// [`EntryKind::Dir`]. The entry carries no path prefix; the full path is the
/// key it is stored under in [`Results::entries`](crate::Results::entries).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The entry's file name, without any directory prefix. Kept as the
    /// platform reports it; names need not be valid UTF-8.
    pub name: OsString,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// Size in bytes as reported by the listing.
    pub len: u64,

    /// Last modification time, when the platform provides it.
    pub modified: Option<SystemTime>,

    /// Whether the entry's permissions mark it read-only.
    pub readonly: bool,
}

/// The kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl Entry {
    /// An entry with no modification time that is not read-only.
    ///
    /// Handy for [`Lister`](crate::Lister) implementations that do not sit on
    /// a real file system.
    pub fn new(name: impl Into<OsString>, kind: EntryKind, len: u64) -> Self {
        Self {
            name: name.into(),
            kind,
            len,
            modified: None,
            readonly: false,
        }
    }

    /// Build an entry from `symlink_metadata`-style metadata.
    pub fn from_metadata(name: impl Into<OsString>, metadata: &Metadata) -> Self {
        let ft = metadata.file_type();
        let kind = if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        };

        Self {
            name: name.into(),
            kind,
            len: metadata.len(),
            modified: metadata.modified().ok(),
            readonly: metadata.permissions().readonly(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    /// The name, if it is valid UTF-8.
    pub fn name_str(&self) -> Option<&str> {
        self.name.to_str()
    }

    /// The name with invalid UTF-8 replaced by `U+FFFD`. For display and
    /// text checks only; never build paths from it.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Names starting with `.` are hidden.
    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().first() == Some(&b'.')
    }

    /// The part of the name after the last `.`, if any.
    ///
    /// A leading dot alone does not start an extension, so `.bashrc` has none.
    pub fn extension(&self) -> Option<&OsStr> {
        Path::new(&self.name).extension()
    }
}
