//! The virtual namespace: directories and text files, held in memory.
//!
//! Directories are keyed by full absolute path in one flat index; each
//! directory owns a name → content map for its files. The two indices are
//! deliberately separate: a directory path and a file name may coexist under
//! the same name, and `rm` resolves the ambiguity by trying the directory
//! path first. Child directories are not linked into their parent's entry
//! map; listing derives them by scanning for paths whose parent is the
//! listed directory.
//!
//! Paths are absolute and `/`-delimited; the root `"/"` always exists and is
//! a directory. `mkdir` does not create intermediate parents.

use std::collections::HashMap;

use crate::error::ShellError;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// What `remove` ended up deleting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removed {
    /// A directory, identified by its full absolute path.
    Directory(String),
    /// A file inside the current directory, identified by name.
    File(String),
}

/// A directory node: the files it owns, keyed by name.
#[derive(Debug, Default)]
struct Directory {
    files: HashMap<String, String>,
}

/// The namespace tree.
#[derive(Debug)]
pub struct Namespace {
    dirs: HashMap<String, Directory>,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Create a namespace containing only the root directory.
    pub fn new() -> Self {
        let mut dirs = HashMap::new();
        dirs.insert("/".to_string(), Directory::default());
        Self { dirs }
    }

    /// Build a child path from a parent path and a name.
    pub fn child_path(parent: &str, name: &str) -> String {
        if parent == "/" {
            format!("/{name}")
        } else {
            format!("{parent}/{name}")
        }
    }

    /// Parent of a path. The root's parent is the root.
    pub fn parent_path(path: &str) -> String {
        if path == "/" {
            return "/".to_string();
        }
        match path.rfind('/') {
            Some(0) | None => "/".to_string(),
            Some(idx) => path[..idx].to_string(),
        }
    }

    /// True if `path` is a registered directory.
    pub fn is_dir(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }

    /// Register a new empty directory named `name` under `cwd`.
    ///
    /// Returns the new directory's full path.
    pub fn mkdir(&mut self, cwd: &str, name: &str) -> Result<String, ShellError> {
        let path = Self::child_path(cwd, name);
        if self.dirs.contains_key(&path) {
            return Err(ShellError::DirectoryExists(path));
        }
        self.dirs.insert(path.clone(), Directory::default());
        Ok(path)
    }

    /// Resolve a `cd` target against `cwd`, returning the new path.
    ///
    /// `..` moves to the parent; anything else must already exist as a
    /// directory directly under `cwd`.
    pub fn change_dir(&self, cwd: &str, target: &str) -> Result<String, ShellError> {
        if target == ".." {
            return Ok(Self::parent_path(cwd));
        }
        let path = Self::child_path(cwd, target);
        if self.dirs.contains_key(&path) {
            Ok(path)
        } else {
            Err(ShellError::DirectoryNotFound(target.to_string()))
        }
    }

    /// List a directory: child directories first, then files, each sorted by
    /// name. The order is implementation-defined but stable within a run.
    pub fn list(&self, path: &str) -> Result<Vec<DirEntry>, ShellError> {
        let dir = self
            .dirs
            .get(path)
            .ok_or_else(|| ShellError::DirectoryNotFound(path.to_string()))?;

        let mut subdirs: Vec<String> = self
            .dirs
            .keys()
            .filter(|k| k.as_str() != path && Self::parent_path(k) == path)
            .filter_map(|k| k.rsplit('/').next().map(str::to_string))
            .collect();
        subdirs.sort();

        let mut files: Vec<String> = dir.files.keys().cloned().collect();
        files.sort();

        let mut entries: Vec<DirEntry> = subdirs
            .into_iter()
            .map(|name| DirEntry {
                name,
                kind: EntryKind::Directory,
            })
            .collect();
        entries.extend(files.into_iter().map(|name| DirEntry {
            name,
            kind: EntryKind::File,
        }));
        Ok(entries)
    }

    /// Remove `target`, resolved against `cwd`.
    ///
    /// Directory removal is tried first: if `cwd/target` is a registered
    /// directory it is deleted (only that exact path key; descendants become
    /// unreachable, not deleted). Otherwise `target` is removed as a file
    /// inside `cwd`. The order is a deliberate, observable policy.
    pub fn remove(&mut self, cwd: &str, target: &str) -> Result<Removed, ShellError> {
        let path = Self::child_path(cwd, target);
        if self.dirs.remove(&path).is_some() {
            return Ok(Removed::Directory(path));
        }
        let dir = self
            .dirs
            .get_mut(cwd)
            .ok_or_else(|| ShellError::DirectoryNotFound(cwd.to_string()))?;
        if dir.files.remove(target).is_some() {
            Ok(Removed::File(target.to_string()))
        } else {
            Err(ShellError::EntryNotFound(target.to_string()))
        }
    }

    /// Create or overwrite a file inside `dir`.
    pub fn write_file(
        &mut self,
        dir: &str,
        name: &str,
        content: impl Into<String>,
    ) -> Result<(), ShellError> {
        let dir = self
            .dirs
            .get_mut(dir)
            .ok_or_else(|| ShellError::DirectoryNotFound(dir.to_string()))?;
        dir.files.insert(name.to_string(), content.into());
        Ok(())
    }

    /// Read a file's content from `dir`.
    pub fn read_file(&self, dir: &str, name: &str) -> Result<&str, ShellError> {
        let dir = self
            .dirs
            .get(dir)
            .ok_or_else(|| ShellError::DirectoryNotFound(dir.to_string()))?;
        dir.files
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ShellError::FileNotFound(name.to_string()))
    }

    /// Delete a file from `dir`.
    pub fn delete_file(&mut self, dir: &str, name: &str) -> Result<(), ShellError> {
        let dir = self
            .dirs
            .get_mut(dir)
            .ok_or_else(|| ShellError::DirectoryNotFound(dir.to_string()))?;
        if dir.files.remove(name).is_some() {
            Ok(())
        } else {
            Err(ShellError::FileNotFound(name.to_string()))
        }
    }
}
