use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for modgen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

const NAME_HELP: &str =
    "component names look like 'nos.sys.vulkan': no whitespace, no path separators, not only dots";

const KIND_HELP: &str =
    "the component kind is 'plugin' or 'subsystem'; pass --kind or set `kind` in modgen.toml";

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid component spec: {reason}")]
    #[diagnostic(code(modgen::invalid_spec))]
    InvalidSpec {
        name: String,
        reason: String,
        #[help]
        help: Option<&'static str>,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(modgen::filesystem_unreadable),
        help("check that the directory exists and is readable by the current user")
    )]
    FilesystemUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(modgen::write_failed))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid spec error
    pub fn invalid_spec(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Self::spec_error(name, reason, None)
    }

    /// Create an invalid spec error caused by a malformed component name
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Self::spec_error(name, reason, Some(NAME_HELP))
    }

    /// Create an invalid spec error caused by a missing or unknown kind
    pub fn invalid_kind(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Self::spec_error(name, reason, Some(KIND_HELP))
    }

    fn spec_error(
        name: impl Into<String>,
        reason: impl Into<String>,
        help: Option<&'static str>,
    ) -> Box<Self> {
        Box::new(Error::InvalidSpec {
            name: name.into(),
            reason: reason.into(),
            help,
        })
    }

    /// Create an unreadable filesystem error
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::FilesystemUnreadable {
            path: path.into(),
            source,
        })
    }

    /// Create a write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Write {
            path: path.into(),
            source,
        })
    }

    /// Whether this error was caused by the component spec rather than the filesystem.
    pub fn is_invalid_spec(&self) -> bool {
        matches!(self, Error::InvalidSpec { .. })
    }
}
