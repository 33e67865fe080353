use std::path::PathBuf;

use clap::Args;
use modgen_generate::{SpecOverrides, resolve_spec};
use modgen_ir::ComponentSpec;
use modgen_manifest::ManifestFile;
use tracing::debug;

use super::UnwrapOrExit;

/// Arguments identifying the component to generate for.
#[derive(Args, Debug)]
pub struct ComponentArgs {
    /// Component kind (overrides modgen.toml)
    #[arg(short, long, value_name = "plugin|subsystem")]
    pub kind: Option<String>,

    /// Component root directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Component name (overrides modgen.toml)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Dependency name, repeatable
    #[arg(short, long = "dependency")]
    pub dependencies: Vec<String>,

    /// Extra include directory, repeatable
    #[arg(short = 'I', long = "include")]
    pub includes: Vec<PathBuf>,

    /// Path to the component manifest (defaults to <root>/modgen.toml if present)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

impl ComponentArgs {
    /// Resolve the generation request, exiting with a diagnostic on failure.
    pub fn spec(&self) -> ComponentSpec {
        let manifest = match &self.manifest {
            Some(path) => Some(ManifestFile::open(path).unwrap_or_exit()),
            None => ManifestFile::discover(&self.root).unwrap_or_exit(),
        };

        if let Some(file) = &manifest {
            debug!(manifest = %file.path().display(), "using component manifest");
        }

        resolve_spec(manifest.as_ref().map(ManifestFile::manifest), self.overrides()).unwrap_or_exit()
    }

    fn overrides(&self) -> SpecOverrides {
        SpecOverrides {
            name: self.name.clone(),
            kind: self.kind.clone(),
            root: self.root.clone(),
            dependencies: self.dependencies.clone(),
            include_directories: self.includes.clone(),
        }
    }
}
