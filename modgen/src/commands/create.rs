use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CreateCommand {
    /// Component kind
    #[arg(value_name = "plugin|subsystem")]
    pub kind: String,

    /// Component name
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Dependency name, repeatable
    #[arg(short, long = "dependency")]
    pub dependencies: Vec<String>,
}

impl CreateCommand {
    pub fn run(&self) -> Result<()> {
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.name));

        let report =
            ops::create(&self.kind, &self.name, &output_dir, &self.dependencies).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
