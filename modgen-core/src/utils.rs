//! Shared name utilities.

use crate::{Error, Result};

/// Convert a component name to PascalCase (e.g., "nos.sys.vulkan" -> "NosSysVulkan")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['.', '_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Check that a component name is usable as a build target name.
///
/// Names must be non-empty and contain no whitespace, path separators or
/// control characters. A name made only of dots would resolve to the
/// current or a parent folder and is rejected too.
pub fn validate_component_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_name(name, "component name is empty"));
    }

    if name.chars().all(|c| c == '.') {
        return Err(Error::invalid_name(
            name,
            format!("component name '{}' is only dots", name),
        ));
    }

    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '\\'))
    {
        return Err(Error::invalid_name(
            name,
            format!("component name '{}' contains invalid character {:?}", name, c),
        ));
    }

    Ok(())
}
