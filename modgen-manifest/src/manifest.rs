//! Manifest types for modgen.toml files.

use std::{path::PathBuf, str::FromStr};

use modgen_core::{ComponentKind, validate_component_name};
use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result, SourceContext};

/// Root manifest for modgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentManifest {
    /// Component description
    pub component: ComponentSection,
}

/// The `[component]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSection {
    /// Component name; may be supplied on the command line instead
    #[serde(default)]
    pub name: Option<Spanned<String>>,

    /// Component kind; may be supplied on the command line instead
    #[serde(default)]
    pub kind: Option<ComponentKind>,

    /// Declared dependency names
    #[serde(default)]
    pub dependencies: Vec<Spanned<String>>,

    /// Extra include directories, relative to the component root
    #[serde(default)]
    pub include_directories: Vec<PathBuf>,
}

impl ComponentSection {
    /// The component name, without span information.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(|n| n.get_ref().as_str())
    }

    /// Dependency names, without span information.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(|d| d.get_ref().as_str())
    }
}

impl ComponentManifest {
    /// Parse a manifest with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: ComponentManifest =
            toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        manifest.validate(&ctx)?;
        Ok(manifest)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if let Some(name) = &self.component.name {
            if let Err(e) = validate_component_name(name.get_ref()) {
                let message = match *e {
                    modgen_core::Error::InvalidSpec { reason, .. } => reason,
                    other => other.to_string(),
                };
                return Err(ctx.validation_error_at(message, name.span()));
            }
        }

        for dependency in &self.component.dependencies {
            if dependency.get_ref().trim().is_empty() {
                return Err(ctx.validation_error_at(
                    "dependency names must not be empty",
                    dependency.span(),
                ));
            }
        }

        Ok(())
    }
}

impl FromStr for ComponentManifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, modgen_core::layout::MANIFEST_FILE)
    }
}
