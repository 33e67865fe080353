use std::path::{Path, PathBuf};

use modgen_core::{ComponentKind, GeneratedFile, layout::MANIFEST_FILE};

/// The modgen.toml component manifest.
pub struct ManifestToml {
    pub name: String,
    pub kind: ComponentKind,
    pub dependencies: Vec<String>,
}

impl ManifestToml {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

fn quoted(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl GeneratedFile for ManifestToml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn render(&self) -> String {
        let dependencies = self
            .dependencies
            .iter()
            .map(|d| quoted(d))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"[component]
name = {}
kind = "{}"
dependencies = [{}]

# Extra include directories, relative to this file:
# include_directories = ["External/include"]
"#,
            quoted(&self.name),
            self.kind,
            dependencies
        )
    }
}
