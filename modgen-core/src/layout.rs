//! On-disk folder conventions for components.
//!
//! Centralizes the folder and file names the generator looks for under a
//! component root, so no magic strings are scattered through the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The component root itself, as a scan folder.
pub const COMPONENT_ROOT: &str = ".";

/// Private implementation sources.
pub const SOURCE_DIR: &str = "Source";

/// Public interface headers.
pub const INCLUDE_DIR: &str = "Include";

/// Structured config descriptors and schemas.
pub const CONFIG_DIR: &str = "Config";

/// Shader stages.
pub const SHADERS_DIR: &str = "Shaders";

/// Build output folder, shared by every build configuration.
pub const BINARIES_DIR: &str = "Binaries";

/// Subsystem defaults, matched by exact name.
pub const DEFAULTS_FILE: &str = "Defaults.json";

/// Optional component manifest at the component root.
pub const MANIFEST_FILE: &str = "modgen.toml";

/// Folder separator used by source-group labels, independent of the host OS.
pub const GROUP_SEPARATOR: char = '\\';

/// A standard build configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BuildConfiguration {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildConfiguration {
    /// The four standard configurations.
    pub const ALL: [BuildConfiguration; 4] = [
        BuildConfiguration::Debug,
        BuildConfiguration::Release,
        BuildConfiguration::RelWithDebInfo,
        BuildConfiguration::MinSizeRel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::Release => "Release",
            BuildConfiguration::RelWithDebInfo => "RelWithDebInfo",
            BuildConfiguration::MinSizeRel => "MinSizeRel",
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_names() {
        assert_eq!(SOURCE_DIR, "Source");
        assert_eq!(INCLUDE_DIR, "Include");
        assert_eq!(BINARIES_DIR, "Binaries");
    }

    #[test]
    fn test_configuration_names() {
        let names: Vec<_> = BuildConfiguration::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["Debug", "Release", "RelWithDebInfo", "MinSizeRel"]);
    }
}
