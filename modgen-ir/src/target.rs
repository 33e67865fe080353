//! The generated target descriptor.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use modgen_core::{BuildConfiguration, ComponentKind, FileCategory};
use serde::Serialize;

use crate::{ClassifiedFileSet, SourceGroupNode};

/// Everything the build-graph executor needs to compile one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDescriptor {
    /// Target name (the component name).
    pub name: String,
    /// Component kind the descriptor was generated for.
    pub kind: ComponentKind,
    /// Component root the descriptor was generated from.
    pub root_directory: PathBuf,
    /// Discovered files by category.
    pub classified_files: ClassifiedFileSet,
    /// Presentation tree mirroring the on-disk layout.
    pub source_groups: Vec<SourceGroupNode>,
    /// Resolved, deduplicated include directories.
    pub include_directories: Vec<PathBuf>,
    /// Declared dependency names, unresolved.
    pub dependencies: Vec<String>,
    /// Output directory per build configuration.
    pub output_directories: IndexMap<BuildConfiguration, PathBuf>,
}

impl TargetDescriptor {
    /// Output directory for a build configuration.
    pub fn output_directory(&self, config: BuildConfiguration) -> Option<&Path> {
        self.output_directories.get(&config).map(PathBuf::as_path)
    }

    /// Files of one category.
    pub fn files(&self, category: FileCategory) -> impl Iterator<Item = &Path> {
        self.classified_files.files(category)
    }

    /// Number of files handed to the compiler.
    pub fn compile_unit_count(&self) -> usize {
        FileCategory::ALL
            .iter()
            .filter(|c| c.is_compiled())
            .map(|c| self.classified_files.count(*c))
            .sum()
    }

    /// Source group a file was assigned to.
    pub fn group_of(&self, file: &Path) -> Option<&SourceGroupNode> {
        self.source_groups.iter().find(|g| g.files.contains(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> TargetDescriptor {
        let mut files = ClassifiedFileSet::new();
        files.insert(FileCategory::Source, "/c/Source/a.cpp");
        files.insert(FileCategory::Resource, "/c/Source/a.rc");
        files.insert(FileCategory::Header, "/c/Source/a.h");

        let mut group = SourceGroupNode::new("Source");
        group.files.extend(files.iter().map(|(_, p)| p.to_path_buf()));

        TargetDescriptor {
            name: "demo".to_string(),
            kind: ComponentKind::Plugin,
            root_directory: PathBuf::from("/c"),
            classified_files: files,
            source_groups: vec![group],
            include_directories: Vec::new(),
            dependencies: Vec::new(),
            output_directories: BuildConfiguration::ALL
                .iter()
                .map(|c| (*c, PathBuf::from("/c/Binaries")))
                .collect(),
        }
    }

    #[test]
    fn test_compile_unit_count() {
        assert_eq!(descriptor().compile_unit_count(), 2);
    }

    #[test]
    fn test_output_directory() {
        let d = descriptor();
        assert_eq!(
            d.output_directory(BuildConfiguration::MinSizeRel),
            Some(Path::new("/c/Binaries"))
        );
    }

    #[test]
    fn test_group_of() {
        let d = descriptor();
        let group = d.group_of(Path::new("/c/Source/a.h")).unwrap();
        assert_eq!(group.label, "Source");
        assert!(d.group_of(Path::new("/c/missing.cpp")).is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(descriptor()).unwrap();
        let outputs = json["output_directories"].as_object().unwrap();
        assert_eq!(outputs.len(), 4);
        for config in BuildConfiguration::ALL {
            assert_eq!(outputs[config.as_str()], "/c/Binaries");
        }
        assert_eq!(json["kind"], "plugin");
        assert_eq!(json["classified_files"]["Source"][0], "/c/Source/a.cpp");
    }
}
