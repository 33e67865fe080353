use clap::Args;
use eyre::Result;
use modgen_generate::DisplayStyle;

use super::{UnwrapOrExit, component::ComponentArgs};
use crate::{
    ops,
    reports::{GroupsReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GroupsCommand {
    #[command(flatten)]
    pub component: ComponentArgs,

    /// Draw the tree with box characters and file counts
    #[arg(short, long)]
    pub tree: bool,
}

impl GroupsCommand {
    pub fn run(&self) -> Result<()> {
        let spec = self.component.spec();
        let report = ops::generate(&spec).unwrap_or_exit();

        let style = if self.tree {
            DisplayStyle::TreeBox
        } else {
            DisplayStyle::Simple
        };
        GroupsReport::new(&report.target, style).render(&mut TerminalOutput::new());

        Ok(())
    }
}
