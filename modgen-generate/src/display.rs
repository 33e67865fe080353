//! Source group tree display formatting.
//!
//! Source groups are stored flat (one node per folder that holds files);
//! this module folds them back into a folder tree for terminal output.
//!
//! # Example
//!
//! ```ignore
//! use modgen_generate::{DisplayStyle, SourceGroupTree};
//!
//! let display = SourceGroupTree::new(&target.source_groups)
//!     .style(DisplayStyle::TreeBox)
//!     .indent("  ");
//!
//! println!("{}", display);
//! ```

use std::{collections::BTreeMap, fmt};

use modgen_ir::SourceGroupNode;

/// Display style for source group trees.
#[derive(Debug, Clone, Copy, Default)]
pub enum DisplayStyle {
    /// Indented folder and file names.
    ///
    /// ```text
    /// Source
    ///   sub
    ///     bar.h
    ///   foo.cpp
    /// ```
    #[default]
    Simple,

    /// Box-drawing tree with per-folder file counts.
    ///
    /// ```text
    /// └─ Source (2 files)
    ///    ├─ sub (1 file)
    ///    │  └─ bar.h
    ///    └─ foo.cpp
    /// ```
    TreeBox,
}

#[derive(Debug, Default)]
struct Folder {
    folders: BTreeMap<String, Folder>,
    files: Vec<String>,
}

impl Folder {
    fn build(groups: &[SourceGroupNode]) -> Self {
        let mut root = Folder::default();
        for group in groups {
            let mut folder = &mut root;
            for segment in group.segments() {
                folder = folder.folders.entry(segment.to_string()).or_default();
            }
            folder.files.extend(group.files.iter().map(|f| {
                f.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| f.display().to_string())
            }));
            folder.files.sort();
        }
        root
    }

    fn file_count(&self) -> usize {
        self.files.len() + self.folders.values().map(Folder::file_count).sum::<usize>()
    }

    /// Folders first, then files, each in name order.
    fn entries(&self) -> impl Iterator<Item = (&str, Option<&Folder>)> {
        self.folders
            .iter()
            .map(|(name, folder)| (name.as_str(), Some(folder)))
            .chain(self.files.iter().map(|name| (name.as_str(), None)))
    }

    fn len(&self) -> usize {
        self.folders.len() + self.files.len()
    }
}

/// Declarative source group tree formatter.
#[derive(Debug, Clone)]
pub struct SourceGroupTree<'a> {
    groups: &'a [SourceGroupNode],
    style: DisplayStyle,
    indent_str: &'a str,
}

impl<'a> SourceGroupTree<'a> {
    pub fn new(groups: &'a [SourceGroupNode]) -> Self {
        Self {
            groups,
            style: DisplayStyle::default(),
            indent_str: "",
        }
    }

    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the base indentation string (default: none).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    /// Render the tree to a string.
    pub fn render(&self) -> String {
        let root = Folder::build(self.groups);
        let mut output = String::new();
        match self.style {
            DisplayStyle::Simple => self.render_simple(&mut output, &root, 0),
            DisplayStyle::TreeBox => self.render_tree_box(&mut output, &root, self.indent_str),
        }
        output
    }

    fn render_simple(&self, output: &mut String, folder: &Folder, depth: usize) {
        for (name, child) in folder.entries() {
            output.push_str(self.indent_str);
            output.push_str(&"  ".repeat(depth));
            output.push_str(name);
            output.push('\n');

            if let Some(child) = child {
                self.render_simple(output, child, depth + 1);
            }
        }
    }

    fn render_tree_box(&self, output: &mut String, folder: &Folder, prefix: &str) {
        let total = folder.len();
        for (i, (name, child)) in folder.entries().enumerate() {
            let is_last = i == total - 1;
            let connector = if is_last { "└─" } else { "├─" };

            output.push_str(prefix);
            output.push_str(connector);
            output.push(' ');
            output.push_str(name);

            if let Some(child) = child {
                let count = child.file_count();
                output.push_str(&format!(
                    " ({} file{})",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
                output.push('\n');

                let child_prefix = if is_last { "   " } else { "│  " };
                self.render_tree_box(output, child, &format!("{}{}", prefix, child_prefix));
            } else {
                output.push('\n');
            }
        }
    }
}

impl fmt::Display for SourceGroupTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = self.render();
        // Remove trailing newline for Display
        write!(f, "{}", output.trim_end())
    }
}
