//! Groups command report.

use modgen_generate::{DisplayStyle, SourceGroupTree};
use modgen_ir::TargetDescriptor;

use super::output::{Output, Report};

/// The source group tree of one component.
#[derive(Debug)]
pub struct GroupsReport<'a> {
    pub target: &'a TargetDescriptor,
    pub style: DisplayStyle,
}

impl<'a> GroupsReport<'a> {
    pub fn new(target: &'a TargetDescriptor, style: DisplayStyle) -> Self {
        Self { target, style }
    }
}

impl Report for GroupsReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        if self.target.source_groups.is_empty() {
            out.warning(&format!("{} has no source files", self.target.name));
            return;
        }

        out.preformatted(
            &SourceGroupTree::new(&self.target.source_groups)
                .style(self.style)
                .to_string(),
        );
    }
}
