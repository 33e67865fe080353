mod completions;
mod component;
mod create;
mod generate;
mod groups;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use create::CreateCommand;
use eyre::Result;
use generate::GenerateCommand;
use groups::GroupsCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for modgen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "modgen")]
#[command(version)]
#[command(about = "Generate build target descriptors for plugin and subsystem components")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Groups(cmd) => cmd.run(),
            Commands::Create(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a component and print its target descriptor
    Generate(GenerateCommand),

    /// Print only the source group tree of a component
    Groups(GroupsCommand),

    /// Scaffold a new plugin or subsystem
    Create(CreateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
