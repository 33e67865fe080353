//! Generate command report data structures.

use std::path::Path;

use modgen_core::FileCategory;
use modgen_generate::SourceGroupTree;
use modgen_ir::TargetDescriptor;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// The generated descriptor.
    pub target: TargetDescriptor,
}

/// Show `path` relative to `root` when it lies inside it.
pub(super) fn display_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let target = &self.target;
        let root = target.root_directory.as_path();

        out.title(&format!("{} ({})", target.name, target.kind));
        out.key_value("Root", &root.display().to_string());
        out.newline();

        if target.classified_files.is_empty() {
            out.warning("no source files found");
        } else {
            out.section("Files");
            for category in FileCategory::ALL {
                let count = target.classified_files.count(category);
                if count > 0 {
                    out.key_value_indented(category.as_str(), &count.to_string());
                }
            }
            out.key_value("Compile units", &target.compile_unit_count().to_string());
            out.newline();
        }

        if !target.include_directories.is_empty() {
            out.section("Include directories");
            for dir in &target.include_directories {
                out.list_item(&display_path(dir, root));
            }
            out.newline();
        }

        if !target.dependencies.is_empty() {
            out.section("Dependencies");
            for dep in &target.dependencies {
                out.list_item(dep);
            }
            out.newline();
        }

        out.section("Output directories");
        for (config, dir) in &target.output_directories {
            out.key_value_indented(config.as_str(), &display_path(dir, root));
        }

        if !target.source_groups.is_empty() {
            out.newline();
            out.section("Source groups");
            out.preformatted(&SourceGroupTree::new(&target.source_groups).indent("  ").to_string());
        }
    }
}
