use std::path::{Path, PathBuf};

use modgen_core::{ComponentKind, GeneratedFile, layout::SOURCE_DIR, to_pascal_case};

/// Entry translation unit: `Source/PluginMain.cpp` or `Source/SubsystemMain.cpp`.
pub struct MainCpp {
    pub name: String,
    pub kind: ComponentKind,
}

impl MainCpp {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    fn render_plugin(&self) -> String {
        r#"#include <Nodos/PluginAPI.h>
#include <Nodos/PluginHelpers.hpp>
#include <Nodos/Helpers.hpp>

NOS_INIT();

extern "C"
{
NOSAPI_ATTR nosResult NOSAPI_CALL nosExportNodeFunctions(size_t* outCount, nosNodeFunctions** outFunctions)
{
    *outCount = (size_t)(0);
    if (!outFunctions)
        return NOS_RESULT_SUCCESS;
    return NOS_RESULT_SUCCESS;
}
}
"#
        .to_string()
    }

    fn render_subsystem(&self) -> String {
        let ty = to_pascal_case(&self.name);
        format!(
            r#"#include <{name}/{ty}.h>
#include <Nodos/SubsystemAPI.h>

NOS_INIT()
NOS_BEGIN_IMPORT_DEPS()
NOS_END_IMPORT_DEPS()

static std::unordered_map<uint32_t, {ty}*> GExported;

nosResult NOSAPI_CALL OnRequest(uint32_t minor, void** outSubsystemCtx)
{{
    auto it = GExported.find(minor);
    if (it != GExported.end())
    {{
        *outSubsystemCtx = it->second;
        return NOS_RESULT_SUCCESS;
    }}
    if (minor != 0)
        return NOS_RESULT_NOT_FOUND;
    auto* subsystem = new {ty}();
    GExported[minor] = subsystem;
    *outSubsystemCtx = subsystem;
    return NOS_RESULT_SUCCESS;
}}

nosResult NOSAPI_CALL OnPreUnloadSubsystem()
{{
    for (auto& [minor, subsystem] : GExported)
        delete subsystem;
    GExported.clear();
    return NOS_RESULT_SUCCESS;
}}

extern "C"
{{
NOSAPI_ATTR nosResult NOSAPI_CALL nosExportSubsystem(nosSubsystemFunctions* subsystemFunctions)
{{
    subsystemFunctions->OnRequest = OnRequest;
    subsystemFunctions->OnPreUnloadSubsystem = OnPreUnloadSubsystem;
    return NOS_RESULT_SUCCESS;
}}
}}
"#,
            name = self.name,
            ty = ty
        )
    }
}

impl GeneratedFile for MainCpp {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(SOURCE_DIR).join(self.kind.main_source_file())
    }

    fn render(&self) -> String {
        match self.kind {
            ComponentKind::Plugin => self.render_plugin(),
            ComponentKind::Subsystem => self.render_subsystem(),
        }
    }
}
