//! Create operation - scaffold a new component.

use std::path::Path;

use modgen_core::Result;
use modgen_generate::{Scaffold, parse_kind};

use crate::reports::CreateReport;

/// Execute the create operation.
///
/// Existing files under `output_dir` are kept and reported as skipped.
pub fn create(
    kind: &str,
    name: &str,
    output_dir: &Path,
    dependencies: &[String],
) -> Result<CreateReport> {
    let kind = parse_kind(name, kind)?;
    let scaffold = dependencies
        .iter()
        .fold(Scaffold::new(name, kind), |s, dep| s.dependency(dep));
    let result = scaffold.write(output_dir)?;

    Ok(CreateReport {
        name: name.to_string(),
        kind,
        output_dir: output_dir.to_path_buf(),
        written: result.written,
        skipped: result.skipped,
    })
}

#[cfg(test)]
mod tests {
    use modgen_core::ComponentKind;
    use modgen_generate::testing::Fixture;

    use super::*;

    #[test]
    fn test_create_then_rerun_skips_everything() {
        let fixture = Fixture::new().unwrap();
        let dir = fixture.root().join("demo");

        let first = create("plugin", "demo", &dir, &["dep".to_string()]).unwrap();
        let second = create("plugin", "demo", &dir, &[]).unwrap();

        assert_eq!(first.written.len(), 3);
        assert!(second.written.is_empty());
        assert_eq!(second.skipped, first.written);
    }

    #[test]
    fn test_create_rejects_bad_name() {
        let fixture = Fixture::new().unwrap();
        let err = create("subsystem", "", fixture.root(), &[]).unwrap_err();
        assert!(err.is_invalid_spec());
    }

    #[test]
    fn test_create_rejects_unknown_kind() {
        let fixture = Fixture::new().unwrap();

        let err = create("engine", "demo", fixture.root(), &[]).unwrap_err();

        assert!(err.is_invalid_spec());
        assert_eq!(std::fs::read_dir(fixture.root()).unwrap().count(), 0);
    }

    #[test]
    fn test_create_rejects_parent_folder_name() {
        let fixture = Fixture::new().unwrap();
        let dir = fixture.dir("work").unwrap();

        for name in [".", ".."] {
            let err = create("plugin", name, &dir.join(name), &[]).unwrap_err();
            assert!(err.is_invalid_spec(), "expected InvalidSpec for {:?}", name);
        }
        assert_eq!(std::fs::read_dir(fixture.root()).unwrap().count(), 1);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_created_kind_is_reported() {
        let fixture = Fixture::new().unwrap();

        let report = create("Subsystem", "nos.sys.demo", &fixture.root().join("s"), &[]).unwrap();

        assert_eq!(report.kind, ComponentKind::Subsystem);
    }
}
