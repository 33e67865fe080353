//! Component manifest (`modgen.toml`) parsing and validation.
//!
//! The manifest is optional: a component can be described entirely from the
//! command line. When present it supplies the name, kind, dependencies and
//! extra include directories.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use file::ManifestFile;
pub use manifest::{ComponentManifest, ComponentSection};
