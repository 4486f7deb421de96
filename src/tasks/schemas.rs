//! Settings schema compilation.

use anyhow::Result;
use std::path::Path;

use crate::context::InstallContext;
use crate::process::Cmd;
use crate::tasks::TaskStatus;

pub(crate) const SCHEMA_COMPILER: &str = "glib-compile-schemas";

/// Compile the gsettings schemas in `schema_dir`.
///
/// The directory is used as given; the build system passes it already
/// resolved, so it is not joined onto the prefix. Compiler failure and
/// absence are both tolerated.
pub fn compile_schemas(ctx: &InstallContext, schema_dir: &Path) -> Result<TaskStatus> {
    compile_with_tool(ctx, schema_dir, SCHEMA_COMPILER)
}

pub(crate) fn compile_with_tool(
    ctx: &InstallContext,
    schema_dir: &Path,
    tool: &str,
) -> Result<TaskStatus> {
    if ctx.staged {
        return Ok(TaskStatus::Skipped);
    }

    let status = Cmd::new(tool)
        .arg_path(schema_dir)
        .allow_fail()
        .allow_missing()
        .run()?;
    Ok(TaskStatus::Ran(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ToolStatus;

    #[test]
    fn test_staged_install_skips_compilation() {
        let ctx = InstallContext::new("", true);
        let status = compile_with_tool(&ctx, Path::new("/usr/share/glib-2.0/schemas"), "false")
            .unwrap();
        assert!(status.skipped());
    }

    #[test]
    fn test_compiler_failure_is_tolerated() {
        let ctx = InstallContext::new("/usr", false);
        let status = compile_with_tool(&ctx, Path::new("/usr/share/glib-2.0/schemas"), "false")
            .unwrap();
        assert_eq!(status, TaskStatus::Ran(ToolStatus::Failed(1)));
    }

    #[test]
    fn test_missing_compiler_is_tolerated() {
        let ctx = InstallContext::new("/usr", false);
        let status = compile_with_tool(
            &ctx,
            Path::new("/usr/share/glib-2.0/schemas"),
            "definitely_not_a_real_command_12345",
        )
        .unwrap();
        assert_eq!(status, TaskStatus::Ran(ToolStatus::Missing));
    }
}
