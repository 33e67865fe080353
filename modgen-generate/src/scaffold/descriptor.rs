use std::path::{Path, PathBuf};

use modgen_core::{ComponentKind, GeneratedFile, layout::BINARIES_DIR};
use serde_json::json;

/// Module descriptor read by the engine: `<name>.noscfg` or `<name>.nossys`.
pub struct Descriptor {
    pub name: String,
    pub kind: ComponentKind,
    pub version: String,
    pub dependencies: Vec<String>,
}

impl Descriptor {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            version: "0.1.0".to_string(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

impl GeneratedFile for Descriptor {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.{}", self.name, self.kind.descriptor_extension()))
    }

    fn render(&self) -> String {
        let dependencies: Vec<_> = self
            .dependencies
            .iter()
            .map(|name| json!({ "name": name, "version": self.version }))
            .collect();

        let descriptor = json!({
            "info": {
                "id": { "name": self.name, "version": self.version },
                "display_name": self.name,
                "dependencies": dependencies,
            },
            "binary_path": format!("{}/{}", BINARIES_DIR, self.name),
        });

        let mut out = serde_json::to_string_pretty(&descriptor).unwrap_or_default();
        out.push('\n');
        out
    }
}
