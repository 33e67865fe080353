//! Tree Scanner.
//!
//! Walks every scan root recursively, classifies each regular file and
//! merges the results into one [`ClassifiedFileSet`]. Roots routinely
//! overlap (the component root contains `Config`, a subsystem's roots may
//! nest, a root may be a link into another), so every file is recorded
//! under its canonical path and a file reachable from several roots is
//! recorded once.

use std::{fs, io, path::Path};

use modgen_core::{ClassifierRules, Error, Result};
use modgen_ir::{ClassifiedFileSet, ScanRoot};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Scan roots for a component, in scan order.
pub fn scan_roots(rules: &ClassifierRules, component_root: &Path) -> Vec<ScanRoot> {
    rules
        .roots
        .iter()
        .map(|rule| ScanRoot::from_rule(component_root, rule))
        .collect()
}

/// Scan all roots and merge the results.
///
/// Missing roots contribute nothing. A root that exists but cannot be read
/// fails with [`Error::FilesystemUnreadable`].
pub fn scan(rules: &ClassifierRules, roots: &[ScanRoot]) -> Result<ClassifiedFileSet> {
    let mut files = ClassifiedFileSet::new();
    for root in roots {
        files.merge(scan_root(rules, root)?);
    }
    Ok(files)
}

fn scan_root(rules: &ClassifierRules, root: &ScanRoot) -> Result<ClassifiedFileSet> {
    let mut files = ClassifiedFileSet::new();

    if !root.path.is_dir() {
        debug!(root = %root.path.display(), "scan root missing, skipping");
        return Ok(files);
    }
    debug!(root = %root.path.display(), "scanning");

    let walker = WalkDir::new(&root.path)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.loop_ancestor().is_some() => {
                warn!(path = ?e.path(), "symbolic link cycle, not descending");
                continue;
            }
            Err(e) if e.io_error().is_some_and(|io| io.kind() == io::ErrorKind::NotFound) => {
                warn!(path = ?e.path(), "entry vanished or dangling link, skipping");
                continue;
            }
            Err(e) => {
                let path = e.path().unwrap_or(root.path.as_path()).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                return Err(Error::unreadable(path, source));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(category) = rules.classify(entry.path()) else {
            trace!(file = %entry.path().display(), "unrecognized, excluded");
            continue;
        };

        if root.accepts(category) {
            let path = fs::canonicalize(entry.path())
                .map_err(|e| Error::unreadable(entry.path(), e))?;
            trace!(file = %path.display(), %category, "classified");
            files.insert(category, path);
        }
    }

    Ok(files)
}
