//! Classified file buckets.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use modgen_core::FileCategory;
use serde::Serialize;

/// Absolute file paths bucketed by category.
///
/// A path is stored at most once across all buckets, so a file reachable
/// from several overlapping scan roots is recorded exactly once. Buckets and
/// their contents are ordered, making the set deterministic for an unchanged
/// tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassifiedFileSet {
    buckets: BTreeMap<FileCategory, BTreeSet<PathBuf>>,
}

impl ClassifiedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` under `category`.
    ///
    /// Returns `false` (and changes nothing) when the path is already
    /// recorded under any category.
    pub fn insert(&mut self, category: FileCategory, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.buckets.entry(category).or_default().insert(path)
    }

    /// Merge another set into this one, keeping the first category seen for
    /// any path present in both.
    pub fn merge(&mut self, other: ClassifiedFileSet) {
        for (category, paths) in other.buckets {
            for path in paths {
                self.insert(category, path);
            }
        }
    }

    /// Files recorded under `category`, in path order.
    pub fn files(&self, category: FileCategory) -> impl Iterator<Item = &Path> {
        self.buckets
            .get(&category)
            .into_iter()
            .flat_map(|paths| paths.iter().map(PathBuf::as_path))
    }

    /// Number of files recorded under `category`.
    pub fn count(&self, category: FileCategory) -> usize {
        self.buckets.get(&category).map_or(0, BTreeSet::len)
    }

    /// Category of a recorded path, if any.
    pub fn category_of(&self, path: &Path) -> Option<FileCategory> {
        self.buckets
            .iter()
            .find(|(_, paths)| paths.contains(path))
            .map(|(category, _)| *category)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.category_of(path).is_some()
    }

    /// Every recorded file with its category, ordered by category then path.
    pub fn iter(&self) -> impl Iterator<Item = (FileCategory, &Path)> {
        self.buckets
            .iter()
            .flat_map(|(category, paths)| paths.iter().map(move |p| (*category, p.as_path())))
    }

    /// Categories with at least one file.
    pub fn categories(&self) -> impl Iterator<Item = FileCategory> + '_ {
        self.buckets
            .iter()
            .filter(|(_, paths)| !paths.is_empty())
            .map(|(category, _)| *category)
    }

    /// Total number of recorded files.
    pub fn len(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
