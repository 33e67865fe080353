//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod create;
mod generate;
mod groups;
mod output;

pub use create::CreateReport;
pub use generate::GenerateReport;
pub use groups::GroupsReport;
pub use output::{Report, TerminalOutput};
