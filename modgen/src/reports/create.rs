//! Create command report data structures.

use std::path::PathBuf;

use modgen_core::ComponentKind;

use super::{
    generate::display_path,
    output::{Output, Report},
};

/// Report data from scaffolding a component.
#[derive(Debug)]
pub struct CreateReport {
    /// Component name.
    pub name: String,
    /// Component kind.
    pub kind: ComponentKind,
    /// Directory the skeleton was written to.
    pub output_dir: PathBuf,
    /// Files created.
    pub written: Vec<PathBuf>,
    /// Files that already existed.
    pub skipped: Vec<PathBuf>,
}

impl Report for CreateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.written.is_empty() {
            out.preformatted(&format!(
                "{} already exists at {}, nothing to create",
                self.name,
                self.output_dir.display()
            ));
        } else {
            out.preformatted(&format!(
                "Created {} {} in {}",
                self.kind,
                self.name,
                self.output_dir.display()
            ));
            out.newline();
            for file in &self.written {
                out.added_item(&display_path(file, &self.output_dir));
            }
        }

        for file in &self.skipped {
            out.warning(&format!("kept existing {}", display_path(file, &self.output_dir)));
        }
    }
}
