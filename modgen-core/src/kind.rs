//! Component kinds.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ClassifierRules, PLUGIN_RULES, SUBSYSTEM_RULES};

/// The kind of component being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Dynamically loaded module with a single primary source tree.
    Plugin,
    /// Module with separate public-interface and private-implementation trees.
    Subsystem,
}

impl ComponentKind {
    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Plugin => "plugin",
            ComponentKind::Subsystem => "subsystem",
        }
    }

    /// The classification table for this kind.
    pub fn rules(&self) -> &'static ClassifierRules {
        match self {
            ComponentKind::Plugin => &PLUGIN_RULES,
            ComponentKind::Subsystem => &SUBSYSTEM_RULES,
        }
    }

    /// Extension of the module descriptor written next to the component.
    pub fn descriptor_extension(&self) -> &'static str {
        match self {
            ComponentKind::Plugin => "noscfg",
            ComponentKind::Subsystem => "nossys",
        }
    }

    /// File name of the entry translation unit in a scaffolded component.
    pub fn main_source_file(&self) -> &'static str {
        match self {
            ComponentKind::Plugin => "PluginMain.cpp",
            ComponentKind::Subsystem => "SubsystemMain.cpp",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plugin" => Ok(ComponentKind::Plugin),
            "subsystem" => Ok(ComponentKind::Subsystem),
            _ => Err(format!(
                "unknown component kind '{}', expected 'plugin' or 'subsystem'",
                s
            )),
        }
    }
}
