//! Source Group Builder.
//!
//! Turns the flat classified file set into a presentation tree for IDEs:
//! one group per folder that directly holds files, labelled with the
//! folder's path relative to the scan root that contributed the file.

use std::{
    collections::BTreeMap,
    path::{Component, Path},
};

use modgen_core::{FileCategory, layout::GROUP_SEPARATOR};
use modgen_ir::{ClassifiedFileSet, ScanRoot, SourceGroupNode};

/// Group every classified file by its containing folder.
///
/// Each file is labelled relative to the first root, in scan order, that
/// holds it and accepts its category. Groups come out ordered by label,
/// each file appears in exactly one group, and files directly in their
/// scan root land in the group with the empty label.
pub fn build_groups(files: &ClassifiedFileSet, roots: &[ScanRoot]) -> Vec<SourceGroupNode> {
    let mut groups: BTreeMap<String, SourceGroupNode> = BTreeMap::new();

    for (category, file) in files.iter() {
        let base = contributing_root(file, category, roots).unwrap_or(Path::new(""));
        let label = group_label(file, base);
        groups
            .entry(label.clone())
            .or_insert_with(|| SourceGroupNode::new(label))
            .files
            .insert(file.to_path_buf());
    }

    groups.into_values().collect()
}

fn contributing_root<'a>(file: &Path, category: FileCategory, roots: &'a [ScanRoot]) -> Option<&'a Path> {
    roots
        .iter()
        .find(|root| root.accepts(category) && file.starts_with(&root.path))
        .map(|root| root.path.as_path())
}

/// Group label for a file: its parent folder relative to `base`, joined
/// with `\`.
///
/// Files outside `base` keep the normal components of their absolute
/// parent so they still group by folder.
pub fn group_label(file: &Path, base: &Path) -> String {
    let parent = file.parent().unwrap_or(Path::new(""));
    let relative = parent.strip_prefix(base).unwrap_or(parent);

    let separator = GROUP_SEPARATOR.to_string();
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(&separator)
}
