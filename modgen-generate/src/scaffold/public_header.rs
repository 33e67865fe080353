use std::path::{Path, PathBuf};

use modgen_core::{GeneratedFile, layout::INCLUDE_DIR, to_pascal_case};

/// Public interface header of a subsystem: `Include/<name>/<Name>.h`.
pub struct PublicHeader {
    pub name: String,
}

impl PublicHeader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for PublicHeader {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(INCLUDE_DIR)
            .join(&self.name)
            .join(format!("{}.h", to_pascal_case(&self.name)))
    }

    fn render(&self) -> String {
        format!(
            r#"#pragma once

#include <Nodos/Types.h>

typedef struct {ty}
{{
    // Exported subsystem functions go here.
    void* Reserved;
}} {ty};
"#,
            ty = to_pascal_case(&self.name)
        )
    }
}
