//! Lowering from manifest + command-line input to a [`ComponentSpec`].

use std::path::PathBuf;

use modgen_core::{ComponentKind, Error, Result};
use modgen_ir::ComponentSpec;
use modgen_manifest::ComponentManifest;

/// Values given on the command line.
///
/// Scalars override the manifest; lists are appended after it. The kind is
/// kept as typed so an unknown kind surfaces as [`Error::InvalidSpec`].
#[derive(Debug, Clone, Default)]
pub struct SpecOverrides {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub root: PathBuf,
    pub dependencies: Vec<String>,
    pub include_directories: Vec<PathBuf>,
}

/// Merge an optional manifest with command-line overrides.
pub fn resolve_spec(
    manifest: Option<&ComponentManifest>,
    overrides: SpecOverrides,
) -> Result<ComponentSpec> {
    let section = manifest.map(|m| &m.component);

    let name = overrides
        .name
        .or_else(|| section.and_then(|s| s.name()).map(str::to_string))
        .ok_or_else(|| Error::invalid_spec("", "no component name given"))?;

    let kind = match overrides.kind {
        Some(kind) => parse_kind(&name, &kind)?,
        None => section
            .and_then(|s| s.kind)
            .ok_or_else(|| Error::invalid_kind(&name, "no component kind given"))?,
    };

    let mut spec = ComponentSpec::new(name, kind, overrides.root);

    if let Some(section) = section {
        spec.dependencies
            .extend(section.dependency_names().map(str::to_string));
        spec.include_directories
            .extend(section.include_directories.iter().cloned());
    }
    spec.dependencies.extend(overrides.dependencies);
    spec.include_directories.extend(overrides.include_directories);

    spec.validate()?;
    Ok(spec)
}

/// Parse a kind typed by the user for component `name`.
pub fn parse_kind(name: &str, kind: &str) -> Result<ComponentKind> {
    kind.parse().map_err(|reason: String| Error::invalid_kind(name, reason))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn manifest() -> ComponentManifest {
        ComponentManifest::from_str(
            r#"
            [component]
            name = "nos.sys.vulkan"
            kind = "subsystem"
            dependencies = ["nos.sys.core"]
            include_directories = ["External"]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_manifest_only() {
        let spec = resolve_spec(
            Some(&manifest()),
            SpecOverrides {
                root: PathBuf::from("/c"),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(spec.name, "nos.sys.vulkan");
        assert_eq!(spec.kind, ComponentKind::Subsystem);
        assert_eq!(spec.dependencies, ["nos.sys.core"]);
        assert_eq!(spec.include_directories, [PathBuf::from("External")]);
    }

    #[test]
    fn test_flags_override_scalars_and_append_lists() {
        let spec = resolve_spec(
            Some(&manifest()),
            SpecOverrides {
                name: Some("renamed".into()),
                kind: Some("Plugin".into()),
                root: PathBuf::from("/c"),
                dependencies: vec!["extra".into()],
                include_directories: vec![PathBuf::from("/opt/sdk")],
            },
        )
        .unwrap();

        assert_eq!(spec.name, "renamed");
        assert_eq!(spec.kind, ComponentKind::Plugin);
        assert_eq!(spec.dependencies, ["nos.sys.core", "extra"]);
        assert_eq!(
            spec.include_directories,
            [PathBuf::from("External"), PathBuf::from("/opt/sdk")]
        );
    }

    #[test]
    fn test_missing_name_is_invalid() {
        let err = resolve_spec(
            None,
            SpecOverrides {
                kind: Some("plugin".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.is_invalid_spec());
    }

    #[test]
    fn test_missing_kind_is_invalid() {
        let err = resolve_spec(
            None,
            SpecOverrides {
                name: Some("demo".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.is_invalid_spec());
    }

    #[test]
    fn test_unknown_kind_is_invalid() {
        let err = resolve_spec(
            Some(&manifest()),
            SpecOverrides {
                kind: Some("engine".into()),
                ..Default::default()
            },
        )
        .unwrap_err();

        assert!(err.is_invalid_spec());
        assert!(err.to_string().contains("unknown component kind 'engine'"));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("demo", "subsystem").unwrap(), ComponentKind::Subsystem);
        assert!(parse_kind("demo", "").unwrap_err().is_invalid_spec());
    }

    #[test]
    fn test_malformed_override_name_is_invalid() {
        let err = resolve_spec(
            Some(&manifest()),
            SpecOverrides {
                name: Some("two words".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.is_invalid_spec());
    }
}
