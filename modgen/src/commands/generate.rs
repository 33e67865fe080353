use clap::{Args, ValueEnum};
use eyre::{Context, Result};

use super::{UnwrapOrExit, component::ComponentArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// Output format for the descriptor.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub component: ComponentArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let spec = self.component.spec();
        let report = ops::generate(&spec).unwrap_or_exit();

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json = serde_json::to_string_pretty(&report.target)
                    .wrap_err("Failed to serialize target descriptor")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}
