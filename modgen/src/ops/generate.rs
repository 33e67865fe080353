//! Generate operation - scan a component into a target descriptor.

use modgen_core::Result;
use modgen_ir::ComponentSpec;
use tracing::debug;

use crate::reports::GenerateReport;

/// Execute the generate operation.
pub fn generate(spec: &ComponentSpec) -> Result<GenerateReport> {
    debug!(root = %spec.root_directory.display(), "generating {}", spec.name);
    let target = modgen_generate::generate(spec)?;
    Ok(GenerateReport { target })
}
