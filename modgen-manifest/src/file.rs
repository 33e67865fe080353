use std::path::{Path, PathBuf};

use modgen_core::layout::MANIFEST_FILE;

use crate::{ComponentManifest, Error, Result};

/// A parsed modgen.toml file and where it was read from.
#[derive(Debug)]
pub struct ManifestFile {
    path: PathBuf,
    manifest: ComponentManifest,
}

impl ManifestFile {
    /// Open and parse a modgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = ComponentManifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Open the manifest at a component root, if the component has one.
    pub fn discover(component_root: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = component_root.as_ref().join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        Self::open(path).map(Some)
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &ComponentManifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_discover_missing_manifest() {
        let temp = TempDir::new().unwrap();
        assert!(ManifestFile::discover(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_existing_manifest() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(MANIFEST_FILE),
            "[component]\nname = \"demo\"\nkind = \"plugin\"\n",
        )
        .unwrap();

        let file = ManifestFile::discover(temp.path()).unwrap().unwrap();
        assert_eq!(file.manifest().component.name(), Some("demo"));
        assert_eq!(file.path(), temp.path().join(MANIFEST_FILE));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = ManifestFile::open(temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
