//! Generation inputs.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use modgen_core::{ComponentKind, FileCategory, Result, RootRule, validate_component_name};
use serde::Serialize;

/// A component build-description request.
///
/// Built by the caller from configuration loaded elsewhere; the generator
/// only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    /// Unique component identifier.
    pub name: String,
    /// Plugin or subsystem.
    pub kind: ComponentKind,
    /// Directory holding the component's `Source`, `Include`, ... folders.
    pub root_directory: PathBuf,
    /// Declared dependency names, in declaration order.
    pub dependencies: Vec<String>,
    /// Extra include directories, absolute or relative to the root.
    pub include_directories: Vec<PathBuf>,
}

impl ComponentSpec {
    /// Create a spec with no dependencies or include directories.
    pub fn new(name: impl Into<String>, kind: ComponentKind, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind,
            root_directory: root.into(),
            dependencies: Vec::new(),
            include_directories: Vec::new(),
        }
    }

    /// Add a dependency name.
    pub fn dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    /// Add an include directory.
    pub fn include_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.include_directories.push(path.into());
        self
    }

    /// Check the parts of the spec that can be checked without touching disk.
    pub fn validate(&self) -> Result<()> {
        validate_component_name(&self.name)
    }
}

/// A directory to scan and the categories it may contribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRoot {
    /// Directory to walk recursively.
    pub path: PathBuf,
    /// Accepted categories; classified files outside this set are dropped.
    pub categories: BTreeSet<FileCategory>,
    /// Whether the root is exposed as an include path of its own component.
    pub exposed: bool,
}

impl ScanRoot {
    pub fn new(path: impl Into<PathBuf>, categories: impl IntoIterator<Item = FileCategory>) -> Self {
        Self {
            path: path.into(),
            categories: categories.into_iter().collect(),
            exposed: false,
        }
    }

    /// Resolve a rule's folder against a component root.
    pub fn from_rule(component_root: &Path, rule: &RootRule) -> Self {
        let path = if rule.folder == modgen_core::layout::COMPONENT_ROOT {
            component_root.to_path_buf()
        } else {
            component_root.join(rule.folder)
        };

        Self {
            path,
            categories: rule.categories.iter().copied().collect(),
            exposed: rule.exposed,
        }
    }

    /// Whether files of `category` are kept when found under this root.
    pub fn accepts(&self, category: FileCategory) -> bool {
        self.categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use modgen_core::{PLUGIN_RULES, SUBSYSTEM_RULES};

    use super::*;

    #[test]
    fn test_builder() {
        let spec = ComponentSpec::new("nos.sys.vulkan", ComponentKind::Subsystem, "/c")
            .dependency("nos.sys.core")
            .include_directory("External/include");

        assert_eq!(spec.dependencies, vec!["nos.sys.core"]);
        assert_eq!(spec.include_directories, vec![PathBuf::from("External/include")]);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let spec = ComponentSpec::new("", ComponentKind::Plugin, "/c");
        assert!(spec.validate().unwrap_err().is_invalid_spec());
    }

    #[test]
    fn test_scan_root_from_rule() {
        let root = Path::new("/work/MyPlugin");

        let source = ScanRoot::from_rule(root, &PLUGIN_RULES.roots[0]);
        assert_eq!(source.path, root.join("Source"));
        assert!(source.accepts(FileCategory::Source));
        assert!(!source.accepts(FileCategory::ConfigDescriptor));

        let top = PLUGIN_RULES.roots.last().unwrap();
        assert_eq!(ScanRoot::from_rule(root, top).path, root);
    }

    #[test]
    fn test_scan_root_keeps_exposure() {
        let root = Path::new("/work/Sys");
        let roots: Vec<_> = SUBSYSTEM_RULES
            .roots
            .iter()
            .map(|r| ScanRoot::from_rule(root, r))
            .filter(|r| r.exposed)
            .collect();

        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].path, root.join("Source"));
        assert_eq!(roots[1].path, root.join("Include"));
    }
}
