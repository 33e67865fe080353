//! Test utilities for building throwaway component trees.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use modgen_core::{ComponentKind, FileCategory};
use modgen_ir::{ClassifiedFileSet, ComponentSpec};
use tempfile::TempDir;

/// A component root inside a temporary directory.
///
/// The root is canonicalized up front so that paths produced by the
/// generator compare equal to paths built from [`Fixture::root`].
pub struct Fixture {
    _dir: TempDir,
    root: PathBuf,
}

impl Fixture {
    /// An empty component root.
    pub fn new() -> io::Result<Self> {
        let dir = TempDir::new()?;
        let root = fs::canonicalize(dir.path())?;
        Ok(Self { _dir: dir, root })
    }

    /// A component root holding empty files at the given relative paths.
    pub fn with_files(files: &[&str]) -> io::Result<Self> {
        let fixture = Self::new()?;
        for file in files {
            fixture.touch(file)?;
        }
        Ok(fixture)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create an empty file, along with any missing parent folders.
    pub fn touch(&self, relative: &str) -> io::Result<PathBuf> {
        self.write(relative, "")
    }

    /// Create a file with contents, along with any missing parent folders.
    pub fn write(&self, relative: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Create an empty folder.
    pub fn dir(&self, relative: &str) -> io::Result<PathBuf> {
        let path = self.root.join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// A spec for this root with no dependencies or extra includes.
    pub fn spec(&self, name: &str, kind: ComponentKind) -> ComponentSpec {
        ComponentSpec::new(name, kind, &self.root)
    }

    /// `path` relative to the root, `/`-separated.
    pub fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Files of one category as root-relative strings, in set order.
    pub fn relative_files(&self, files: &ClassifiedFileSet, category: FileCategory) -> Vec<String> {
        files.files(category).map(|p| self.relative(p)).collect()
    }
}
