//! Target Assembler.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use modgen_core::{BuildConfiguration, ComponentKind, layout::BINARIES_DIR, Result};
use modgen_ir::{ClassifiedFileSet, ComponentSpec, ScanRoot, SourceGroupNode, TargetDescriptor};

/// Combine a spec with its scan results into a [`TargetDescriptor`].
///
/// Pure: touches no filesystem state. Subsystems get their exposed scan
/// roots appended to the include directories; plugins never do.
pub fn assemble(
    spec: &ComponentSpec,
    files: ClassifiedFileSet,
    groups: Vec<SourceGroupNode>,
    scanned_roots: &[ScanRoot],
) -> Result<TargetDescriptor> {
    spec.validate()?;

    let root = spec.root_directory.as_path();

    Ok(TargetDescriptor {
        name: spec.name.clone(),
        kind: spec.kind,
        root_directory: root.to_path_buf(),
        classified_files: files,
        source_groups: groups,
        include_directories: include_directories(spec, scanned_roots),
        dependencies: spec
            .dependencies
            .iter()
            .cloned()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect(),
        output_directories: output_directories(root),
    })
}

fn include_directories(spec: &ComponentSpec, scanned_roots: &[ScanRoot]) -> Vec<PathBuf> {
    let root = spec.root_directory.as_path();
    let mut includes: IndexSet<PathBuf> = spec
        .include_directories
        .iter()
        .map(|dir| resolve(root, dir))
        .collect();

    if spec.kind == ComponentKind::Subsystem {
        includes.extend(
            scanned_roots
                .iter()
                .filter(|r| r.exposed)
                .map(|r| r.path.clone()),
        );
    }

    includes.into_iter().collect()
}

fn output_directories(root: &Path) -> IndexMap<BuildConfiguration, PathBuf> {
    let binaries = root.join(BINARIES_DIR);
    BuildConfiguration::ALL
        .iter()
        .map(|config| (*config, binaries.clone()))
        .collect()
}

fn resolve(root: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        root.join(dir)
    }
}

#[cfg(test)]
mod tests {
    use modgen_core::{Error, SUBSYSTEM_RULES, PLUGIN_RULES};

    use super::*;
    use crate::scan::scan_roots;

    #[test]
    fn test_rejects_invalid_name() {
        let spec = ComponentSpec::new("  ", ComponentKind::Plugin, "/c");
        let err = assemble(&spec, ClassifiedFileSet::new(), Vec::new(), &[]).unwrap_err();
        assert!(matches!(*err, Error::InvalidSpec { .. }));
    }

    #[test]
    fn test_subsystem_exposes_source_and_include() {
        let root = Path::new("/work/Sys");
        let spec = ComponentSpec::new("nos.sys.demo", ComponentKind::Subsystem, root)
            .include_directory("External/include")
            .include_directory("/work/Sys/Include");
        let roots = scan_roots(&SUBSYSTEM_RULES, root);

        let target = assemble(&spec, ClassifiedFileSet::new(), Vec::new(), &roots).unwrap();

        assert_eq!(
            target.include_directories,
            vec![
                root.join("External/include"),
                root.join("Include"),
                root.join("Source"),
            ]
        );
    }

    #[test]
    fn test_plugin_gets_only_declared_includes() {
        let root = Path::new("/work/Plug");
        let spec = ComponentSpec::new("demo", ComponentKind::Plugin, root).include_directory("/opt/sdk");
        let roots = scan_roots(&PLUGIN_RULES, root);

        let target = assemble(&spec, ClassifiedFileSet::new(), Vec::new(), &roots).unwrap();

        assert_eq!(target.include_directories, vec![PathBuf::from("/opt/sdk")]);
    }

    #[test]
    fn test_dependencies_collapse_duplicates() {
        let spec = ComponentSpec::new("demo", ComponentKind::Plugin, "/c")
            .dependency("b")
            .dependency("a")
            .dependency("b");

        let target = assemble(&spec, ClassifiedFileSet::new(), Vec::new(), &[]).unwrap();

        assert_eq!(target.dependencies, ["b", "a"]);
    }

    #[test]
    fn test_every_configuration_targets_binaries() {
        let spec = ComponentSpec::new("demo", ComponentKind::Plugin, "/c");
        let target = assemble(&spec, ClassifiedFileSet::new(), Vec::new(), &[]).unwrap();

        assert_eq!(target.output_directories.len(), 4);
        for config in BuildConfiguration::ALL {
            assert_eq!(target.output_directory(config), Some(Path::new("/c/Binaries")));
        }
    }
}
