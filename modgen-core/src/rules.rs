//! Per-kind classification tables.
//!
//! Plugins and subsystems accept overlapping but not identical artifact sets.
//! Each kind gets one named table; the generator looks it up once and the
//! rest of the pipeline is kind-agnostic.

use std::path::Path;

use crate::{ComponentKind, FileCategory, layout};

/// A folder scanned for a component and the categories it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootRule {
    /// Folder relative to the component root (`"."` is the root itself).
    pub folder: &'static str,
    /// Categories accepted from files under this folder.
    pub categories: &'static [FileCategory],
    /// Whether this is a source/include root exposed as an include path.
    pub exposed: bool,
}

/// The extension table and scan roots for one component kind.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierRules {
    /// Kind these rules apply to.
    pub kind: ComponentKind,
    /// Exact file names, checked before extensions.
    pub file_names: &'static [(&'static str, FileCategory)],
    /// Case-sensitive extensions without the leading dot.
    pub extensions: &'static [(&'static str, FileCategory)],
    /// Folders to scan, in scan order.
    pub roots: &'static [RootRule],
}

use FileCategory::*;

const CONFIG_ONLY: &[FileCategory] = &[ConfigDescriptor];
const SHADERS_ONLY: &[FileCategory] = &[ShaderStage];
const PUBLIC_INTERFACE: &[FileCategory] = &[Header, InlineSource];

/// Classification rules for plugins.
pub const PLUGIN_RULES: ClassifierRules = ClassifierRules {
    kind: ComponentKind::Plugin,
    file_names: &[],
    extensions: &[
        ("cpp", Source),
        ("inl", InlineSource),
        ("glsl", ShaderStage),
        ("hlsl", ShaderStage),
        ("comp", ShaderStage),
        ("frag", ShaderStage),
        ("vert", ShaderStage),
        ("py", Script),
        ("h", Header),
        ("hpp", Header),
        ("rc", Resource),
        ("noscfg", ConfigDescriptor),
        ("nosdef", ConfigDescriptor),
        ("fbs", ConfigDescriptor),
    ],
    roots: &[
        RootRule {
            folder: layout::SOURCE_DIR,
            categories: &[Source, InlineSource, Header, ShaderStage, Script, Resource],
            exposed: false,
        },
        RootRule {
            folder: layout::INCLUDE_DIR,
            categories: PUBLIC_INTERFACE,
            exposed: false,
        },
        RootRule {
            folder: layout::SHADERS_DIR,
            categories: SHADERS_ONLY,
            exposed: false,
        },
        RootRule {
            folder: layout::CONFIG_DIR,
            categories: CONFIG_ONLY,
            exposed: false,
        },
        RootRule {
            folder: layout::COMPONENT_ROOT,
            categories: CONFIG_ONLY,
            exposed: false,
        },
    ],
};

/// Classification rules for subsystems.
pub const SUBSYSTEM_RULES: ClassifierRules = ClassifierRules {
    kind: ComponentKind::Subsystem,
    file_names: &[(layout::DEFAULTS_FILE, ConfigDescriptor)],
    extensions: &[
        ("cpp", Source),
        ("cc", Source),
        ("c", Source),
        ("inl", InlineSource),
        ("frag", ShaderStage),
        ("vert", ShaderStage),
        ("glsl", ShaderStage),
        ("comp", ShaderStage),
        ("dat", Data),
        ("natvis", NativeVisualizer),
        ("h", Header),
        ("hpp", Header),
        ("rc", Resource),
        ("nossys", ConfigDescriptor),
        ("fbs", ConfigDescriptor),
    ],
    roots: &[
        RootRule {
            folder: layout::SOURCE_DIR,
            categories: &[
                Source,
                InlineSource,
                Header,
                ShaderStage,
                Data,
                NativeVisualizer,
                Resource,
            ],
            exposed: true,
        },
        RootRule {
            folder: layout::INCLUDE_DIR,
            categories: PUBLIC_INTERFACE,
            exposed: true,
        },
        RootRule {
            folder: layout::SHADERS_DIR,
            categories: SHADERS_ONLY,
            exposed: false,
        },
        RootRule {
            folder: layout::CONFIG_DIR,
            categories: CONFIG_ONLY,
            exposed: false,
        },
        RootRule {
            folder: layout::COMPONENT_ROOT,
            categories: CONFIG_ONLY,
            exposed: false,
        },
    ],
};

impl ClassifierRules {
    /// Classify a file by its name.
    ///
    /// Exact file-name matches win over extensions. Matching is
    /// case-sensitive. Unknown files yield `None`.
    pub fn classify(&self, path: &Path) -> Option<FileCategory> {
        let file_name = path.file_name()?.to_str()?;
        if let Some((_, category)) = self.file_names.iter().find(|(name, _)| *name == file_name) {
            return Some(*category);
        }

        let ext = path.extension()?.to_str()?;
        self.extensions
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, category)| *category)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn produces(rules: &ClassifierRules, category: FileCategory) -> bool {
        rules.extensions.iter().any(|(_, c)| *c == category)
            || rules.file_names.iter().any(|(_, c)| *c == category)
    }

    #[test]
    fn test_plugin_classification() {
        let rules = &PLUGIN_RULES;
        assert_eq!(rules.classify(Path::new("a/Main.cpp")), Some(Source));
        assert_eq!(rules.classify(Path::new("a/Main.inl")), Some(InlineSource));
        assert_eq!(rules.classify(Path::new("Blur.hlsl")), Some(ShaderStage));
        assert_eq!(rules.classify(Path::new("tool.py")), Some(Script));
        assert_eq!(rules.classify(Path::new("Plugin.hpp")), Some(Header));
        assert_eq!(rules.classify(Path::new("Plugin.rc")), Some(Resource));
        assert_eq!(rules.classify(Path::new("Plugin.nosdef")), Some(ConfigDescriptor));
        // subsystem-only extensions
        assert_eq!(rules.classify(Path::new("legacy.c")), None);
        assert_eq!(rules.classify(Path::new("table.dat")), None);
        assert_eq!(rules.classify(Path::new("Types.natvis")), None);
        assert_eq!(rules.classify(Path::new("Defaults.json")), None);
    }

    #[test]
    fn test_subsystem_classification() {
        let rules = &SUBSYSTEM_RULES;
        assert_eq!(rules.classify(Path::new("impl.cc")), Some(Source));
        assert_eq!(rules.classify(Path::new("impl.c")), Some(Source));
        assert_eq!(rules.classify(Path::new("lut.dat")), Some(Data));
        assert_eq!(rules.classify(Path::new("Types.natvis")), Some(NativeVisualizer));
        assert_eq!(rules.classify(Path::new("Vk.nossys")), Some(ConfigDescriptor));
        assert_eq!(rules.classify(Path::new("Config/Defaults.json")), Some(ConfigDescriptor));
        // plugin-only extensions
        assert_eq!(rules.classify(Path::new("Blur.hlsl")), None);
        assert_eq!(rules.classify(Path::new("tool.py")), None);
        assert_eq!(rules.classify(Path::new("Plugin.noscfg")), None);
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        assert_eq!(PLUGIN_RULES.classify(Path::new("Main.CPP")), None);
        assert_eq!(SUBSYSTEM_RULES.classify(Path::new("defaults.json")), None);
        assert_eq!(SUBSYSTEM_RULES.classify(Path::new("other.json")), None);
    }

    #[test]
    fn test_unknown_and_extensionless_files() {
        assert_eq!(PLUGIN_RULES.classify(Path::new("notes.txt")), None);
        assert_eq!(PLUGIN_RULES.classify(Path::new("Makefile")), None);
        assert_eq!(PLUGIN_RULES.classify(Path::new(".cpp")), None);
    }

    #[test]
    fn test_extensions_map_to_one_category() {
        for rules in [&PLUGIN_RULES, &SUBSYSTEM_RULES] {
            let mut seen = HashSet::new();
            for (ext, _) in rules.extensions {
                assert!(seen.insert(*ext), "duplicate extension '{}'", ext);
            }
        }
    }

    #[test]
    fn test_root_categories_are_producible() {
        for rules in [&PLUGIN_RULES, &SUBSYSTEM_RULES] {
            for root in rules.roots {
                for category in root.categories {
                    assert!(
                        produces(rules, *category),
                        "{} root '{}' accepts unproducible {}",
                        rules.kind,
                        root.folder,
                        category
                    );
                }
            }
        }
    }

    #[test]
    fn test_exposed_roots() {
        let exposed: Vec<_> = SUBSYSTEM_RULES
            .roots
            .iter()
            .filter(|r| r.exposed)
            .map(|r| r.folder)
            .collect();
        assert_eq!(exposed, vec![layout::SOURCE_DIR, layout::INCLUDE_DIR]);
        assert!(PLUGIN_RULES.roots.iter().all(|r| !r.exposed));
    }
}
