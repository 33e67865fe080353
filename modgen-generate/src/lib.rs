//! Discovery, classification and target assembly for modgen.
//!
//! A generation call runs four stages, each a plain function over the
//! previous stage's output:
//!
//! ```text
//! ComponentSpec ─┬─ scan_roots ─ scan ─ ClassifiedFileSet ─ build_groups ─┐
//!                └────────────────────────────────────────────────────────┴─ assemble ─ TargetDescriptor
//! ```
//!
//! # Module Organization
//!
//! - [`scan`] - Tree Scanner (recursive multi-root walk with deduplication)
//! - [`groups`] - Source-Group Builder (presentation labels)
//! - [`assemble`] - Target Assembler (includes, outputs, dependencies)
//! - [`generator`] - Plugin and subsystem generators tying the stages together
//! - [`lower`] - Resolving a [`ComponentSpec`](modgen_ir::ComponentSpec) from manifest and overrides
//! - [`display`] - Source-group tree rendering for terminals
//! - [`scaffold`] - Files written when creating a new component
//! - [`testing`] - Test fixtures (feature-gated)

pub mod assemble;
pub mod display;
pub mod generator;
pub mod groups;
pub mod lower;
pub mod scaffold;
pub mod scan;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use assemble::assemble;
pub use display::{DisplayStyle, SourceGroupTree};
pub use generator::{ComponentGenerator, PluginGenerator, SubsystemGenerator, generate};
pub use groups::{build_groups, group_label};
pub use lower::{SpecOverrides, parse_kind, resolve_spec};
pub use scaffold::{Scaffold, ScaffoldResult};
pub use scan::{scan, scan_roots};
