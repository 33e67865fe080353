use std::{collections::BTreeSet, path::PathBuf};

use modgen_core::layout::GROUP_SEPARATOR;
use serde::Serialize;

/// One folder level of the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceGroupNode {
    /// Folder path relative to the scan root that contributed the files,
    /// `\`-separated. Empty for files directly in that root.
    pub label: String,
    /// Files directly inside this folder.
    pub files: BTreeSet<PathBuf>,
}

impl SourceGroupNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            files: BTreeSet::new(),
        }
    }

    /// Label segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.label.split(GROUP_SEPARATOR).filter(|s| !s.is_empty())
    }
}
