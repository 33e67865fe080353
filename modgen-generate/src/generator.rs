//! Per-kind generators.
//!
//! A generator owns the fixed pipeline: validate the spec, anchor the root
//! to an absolute path, scan, group, assemble. Each stage hands its output
//! to the next as a plain value.

use std::path::{Path, PathBuf};

use modgen_core::{ClassifierRules, ComponentKind, Error, Result};
use modgen_ir::{ComponentSpec, ScanRoot, TargetDescriptor};
use tracing::{debug, instrument};

use crate::{assemble::assemble, groups::build_groups, scan};

/// Build-description generator for one component kind.
pub trait ComponentGenerator {
    /// The kind this generator accepts.
    fn kind(&self) -> ComponentKind;

    /// Classification rules for this kind.
    fn rules(&self) -> &'static ClassifierRules {
        self.kind().rules()
    }

    /// Scan roots for a component rooted at `component_root`.
    fn scan_roots(&self, component_root: &Path) -> Vec<ScanRoot> {
        scan::scan_roots(self.rules(), component_root)
    }

    /// Produce the target descriptor for `spec`.
    ///
    /// Fails with [`Error::InvalidSpec`] before reading the filesystem when
    /// the spec is malformed or names a different kind.
    fn generate(&self, spec: &ComponentSpec) -> Result<TargetDescriptor> {
        spec.validate()?;
        if spec.kind != self.kind() {
            return Err(Error::invalid_kind(
                &spec.name,
                format!("a {} generator cannot build a {}", self.kind(), spec.kind),
            ));
        }

        let mut spec = spec.clone();
        spec.root_directory = absolute_root(&spec.root_directory)?;
        let root = spec.root_directory.as_path();

        let roots = anchor_roots(self.scan_roots(root))?;
        let files = scan::scan(self.rules(), &roots)?;
        debug!(files = files.len(), "scan complete");

        let groups = build_groups(&files, &roots);
        assemble(&spec, files, groups, &roots)
    }
}

/// Generator for plugins.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginGenerator;

impl ComponentGenerator for PluginGenerator {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Plugin
    }
}

/// Generator for subsystems.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsystemGenerator;

impl ComponentGenerator for SubsystemGenerator {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Subsystem
    }
}

/// Generate a descriptor with the generator matching `spec.kind`.
#[instrument(skip_all, fields(name = %spec.name, kind = %spec.kind))]
pub fn generate(spec: &ComponentSpec) -> Result<TargetDescriptor> {
    match spec.kind {
        ComponentKind::Plugin => PluginGenerator.generate(spec),
        ComponentKind::Subsystem => SubsystemGenerator.generate(spec),
    }
}

/// Absolute form of a component root, canonical when it exists.
fn absolute_root(root: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(root).map_err(|e| Error::unreadable(root, e))?;
    if absolute.exists() {
        absolute
            .canonicalize()
            .map_err(|e| Error::unreadable(&absolute, e))
    } else {
        Ok(absolute)
    }
}

/// Canonical form of every existing scan root, so scanned files (recorded
/// canonically) can be matched back to the root that holds them.
fn anchor_roots(roots: Vec<ScanRoot>) -> Result<Vec<ScanRoot>> {
    roots
        .into_iter()
        .map(|mut root| -> Result<ScanRoot> {
            if root.path.is_dir() {
                root.path = root
                    .path
                    .canonicalize()
                    .map_err(|e| Error::unreadable(&root.path, e))?;
            }
            Ok(root)
        })
        .collect()
}
