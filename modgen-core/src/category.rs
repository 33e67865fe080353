//! File categories assigned by the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role a file plays in a component build.
///
/// Declaration order is the order categories appear in descriptors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FileCategory {
    /// Compiled translation units.
    Source,
    /// Inline implementation files included by headers.
    InlineSource,
    /// Public or private headers.
    Header,
    /// GPU shader stages compiled by the shader toolchain.
    ShaderStage,
    /// Interpreted helper scripts shipped with a plugin.
    Script,
    /// Raw data files shipped with a subsystem.
    Data,
    /// Native resource scripts.
    Resource,
    /// Structured config descriptors and schemas.
    ConfigDescriptor,
    /// Debugger visualization descriptors.
    NativeVisualizer,
}

impl FileCategory {
    /// Every category, in declaration order.
    pub const ALL: [FileCategory; 9] = [
        FileCategory::Source,
        FileCategory::InlineSource,
        FileCategory::Header,
        FileCategory::ShaderStage,
        FileCategory::Script,
        FileCategory::Data,
        FileCategory::Resource,
        FileCategory::ConfigDescriptor,
        FileCategory::NativeVisualizer,
    ];

    /// Returns the category name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Source => "Source",
            FileCategory::InlineSource => "InlineSource",
            FileCategory::Header => "Header",
            FileCategory::ShaderStage => "ShaderStage",
            FileCategory::Script => "Script",
            FileCategory::Data => "Data",
            FileCategory::Resource => "Resource",
            FileCategory::ConfigDescriptor => "ConfigDescriptor",
            FileCategory::NativeVisualizer => "NativeVisualizer",
        }
    }

    /// Whether files of this category are handed to the C/C++ compiler.
    pub fn is_compiled(&self) -> bool {
        matches!(self, FileCategory::Source | FileCategory::Resource)
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_by_declaration() {
        let mut sorted = FileCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, FileCategory::ALL);
    }

    #[test]
    fn test_serialize_uses_variant_name() {
        let json = serde_json::to_string(&FileCategory::ConfigDescriptor).unwrap();
        assert_eq!(json, r#""ConfigDescriptor""#);
        assert_eq!(FileCategory::InlineSource.to_string(), "InlineSource");
    }

    #[test]
    fn test_is_compiled() {
        assert!(FileCategory::Source.is_compiled());
        assert!(FileCategory::Resource.is_compiled());
        assert!(!FileCategory::Header.is_compiled());
        assert!(!FileCategory::ShaderStage.is_compiled());
    }
}
