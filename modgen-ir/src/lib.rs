//! Data model for the modgen target generator.
//!
//! These types flow through the generation pipeline:
//!
//! ```text
//! ComponentSpec → [ScanRoot] → ClassifiedFileSet → [SourceGroupNode] → TargetDescriptor
//! ```
//!
//! Everything except [`ComponentSpec`] is created fresh per generation call
//! and owned by the caller afterwards. No type here touches the filesystem.

mod files;
mod groups;
mod spec;
mod target;

pub use files::ClassifiedFileSet;
pub use groups::SourceGroupNode;
pub use spec::{ComponentSpec, ScanRoot};
pub use target::TargetDescriptor;
