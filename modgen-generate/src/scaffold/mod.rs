//! Component scaffolding.
//!
//! Writes the skeleton of a new component: manifest, entry source, module
//! descriptor and, for subsystems, the public header. Files that already
//! exist are left alone.

mod descriptor;
mod main_cpp;
mod manifest_toml;
mod public_header;

use std::path::{Path, PathBuf};

use modgen_core::{ComponentKind, GeneratedFile, Result, WriteResult, validate_component_name};
use tracing::debug;

pub use descriptor::Descriptor;
pub use main_cpp::MainCpp;
pub use manifest_toml::ManifestToml;
pub use public_header::PublicHeader;

/// A new component skeleton.
#[derive(Debug, Clone)]
pub struct Scaffold {
    pub name: String,
    pub kind: ComponentKind,
    pub dependencies: Vec<String>,
}

/// Outcome of writing a scaffold.
#[derive(Debug, Default)]
pub struct ScaffoldResult {
    /// Files that were created.
    pub written: Vec<PathBuf>,
    /// Files that already existed and were kept.
    pub skipped: Vec<PathBuf>,
}

impl Scaffold {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            dependencies: Vec::new(),
        }
    }

    pub fn dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    /// The files making up this skeleton.
    pub fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        let mut files: Vec<Box<dyn GeneratedFile>> = vec![
            Box::new(
                ManifestToml::new(&self.name, self.kind)
                    .with_dependencies(self.dependencies.clone()),
            ),
            Box::new(MainCpp::new(&self.name, self.kind)),
            Box::new(
                Descriptor::new(&self.name, self.kind).with_dependencies(self.dependencies.clone()),
            ),
        ];
        if self.kind == ComponentKind::Subsystem {
            files.push(Box::new(PublicHeader::new(&self.name)));
        }
        files
    }

    /// Write the skeleton under `component_root`.
    pub fn write(&self, component_root: &Path) -> Result<ScaffoldResult> {
        validate_component_name(&self.name)?;

        let mut result = ScaffoldResult::default();
        for file in self.files() {
            let path = file.path(component_root);
            match file.write(component_root)? {
                WriteResult::Written => {
                    debug!(file = %path.display(), "created");
                    result.written.push(path);
                }
                WriteResult::Skipped => {
                    debug!(file = %path.display(), "exists, kept");
                    result.skipped.push(path);
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use modgen_core::FileCategory;

    use super::*;
    use crate::{generate, testing::Fixture};

    #[test]
    fn test_plugin_files() {
        let fixture = Fixture::new().unwrap();

        let result = Scaffold::new("my.plugin", ComponentKind::Plugin)
            .write(fixture.root())
            .unwrap();

        let written: Vec<_> = result.written.iter().map(|p| fixture.relative(p)).collect();
        assert_eq!(
            written,
            ["modgen.toml", "Source/PluginMain.cpp", "my.plugin.noscfg"]
        );
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_subsystem_files() {
        let fixture = Fixture::new().unwrap();

        let result = Scaffold::new("nos.sys.demo", ComponentKind::Subsystem)
            .write(fixture.root())
            .unwrap();

        let written: Vec<_> = result.written.iter().map(|p| fixture.relative(p)).collect();
        assert_eq!(
            written,
            [
                "modgen.toml",
                "Source/SubsystemMain.cpp",
                "nos.sys.demo.nossys",
                "Include/nos.sys.demo/NosSysDemo.h",
            ]
        );

        let main = fs::read_to_string(fixture.root().join("Source/SubsystemMain.cpp")).unwrap();
        assert!(main.starts_with("#include <nos.sys.demo/NosSysDemo.h>"));
    }

    #[test]
    fn test_existing_files_are_kept() {
        let fixture = Fixture::new().unwrap();
        let manifest = fixture.write("modgen.toml", "# mine\n").unwrap();

        let result = Scaffold::new("demo", ComponentKind::Plugin)
            .write(fixture.root())
            .unwrap();

        assert_eq!(result.skipped, [manifest.clone()]);
        assert_eq!(fs::read_to_string(manifest).unwrap(), "# mine\n");
    }

    #[test]
    fn test_invalid_name_writes_nothing() {
        let fixture = Fixture::new().unwrap();

        let err = Scaffold::new("bad name", ComponentKind::Plugin)
            .write(fixture.root())
            .unwrap_err();

        assert!(err.is_invalid_spec());
        assert_eq!(fs::read_dir(fixture.root()).unwrap().count(), 0);
    }

    #[test]
    fn test_manifest_round_trips_through_parser() {
        let manifest = ManifestToml::new("demo", ComponentKind::Subsystem)
            .with_dependencies(vec!["nos.sys.core".into(), "odd\"name".into()]);

        let parsed: modgen_manifest::ComponentManifest = manifest.render().parse().unwrap();

        assert_eq!(parsed.component.name(), Some("demo"));
        assert_eq!(parsed.component.kind, Some(ComponentKind::Subsystem));
        assert_eq!(
            parsed.component.dependency_names().collect::<Vec<_>>(),
            ["nos.sys.core", "odd\"name"]
        );
    }

    #[test]
    fn test_descriptor_contents() {
        let descriptor = Descriptor::new("demo", ComponentKind::Plugin).with_dependencies(vec!["dep".into()]);
        insta::assert_snapshot!(descriptor.render().trim_end(), @r#"
        {
          "binary_path": "Binaries/demo",
          "info": {
            "dependencies": [
              {
                "name": "dep",
                "version": "0.1.0"
              }
            ],
            "display_name": "demo",
            "id": {
              "name": "demo",
              "version": "0.1.0"
            }
          }
        }
        "#);
    }

    #[test]
    fn test_scaffolded_component_generates() {
        let fixture = Fixture::new().unwrap();
        Scaffold::new("nos.sys.demo", ComponentKind::Subsystem)
            .write(fixture.root())
            .unwrap();

        let target = generate(&fixture.spec("nos.sys.demo", ComponentKind::Subsystem)).unwrap();

        assert_eq!(target.classified_files.count(FileCategory::Source), 1);
        assert_eq!(target.classified_files.count(FileCategory::Header), 1);
        assert_eq!(target.classified_files.count(FileCategory::ConfigDescriptor), 1);
    }
}
