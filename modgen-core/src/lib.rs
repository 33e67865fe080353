//! Core types and rules for the modgen target generator.
//!
//! This crate holds the vocabulary shared by every other modgen crate:
//! component kinds, file categories, the per-kind classification tables,
//! the on-disk folder conventions and the error type.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod category;
mod error;
mod file;
mod kind;
pub mod layout;
mod rules;
mod utils;

pub use category::FileCategory;
pub use error::{Error, Result};
// File operations
pub use file::{GeneratedFile, WriteResult};
pub use kind::ComponentKind;
pub use layout::BuildConfiguration;
pub use rules::{ClassifierRules, PLUGIN_RULES, RootRule, SUBSYSTEM_RULES};
// Name utilities
pub use utils::{to_pascal_case, validate_component_name};
