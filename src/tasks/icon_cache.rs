//! Icon theme cache refresh.
//!
//! Rebuilds the precomputed icon lookup cache after icons are
//! installed. The cache belongs to the running system, so staged
//! installs skip the rebuild entirely.

use anyhow::Result;
use std::path::Path;

use crate::context::InstallContext;
use crate::process::Cmd;
use crate::tasks::TaskStatus;

pub(crate) const ICON_CACHE_TOOL: &str = "gtk-update-icon-cache";

/// Refresh the icon theme cache for a prefix-relative icon root.
///
/// The rebuild is forced (`-f`) and writes a themed cache (`-t`).
/// Tool failure and absence are both tolerated; this entry never
/// fails the install.
pub fn update_icon_cache(ctx: &InstallContext, icon_dir: &Path) -> Result<TaskStatus> {
    refresh_with_tool(ctx, icon_dir, ICON_CACHE_TOOL)
}

pub(crate) fn refresh_with_tool(
    ctx: &InstallContext,
    icon_dir: &Path,
    tool: &str,
) -> Result<TaskStatus> {
    if ctx.staged {
        return Ok(TaskStatus::Skipped);
    }

    let target = ctx.resolve(icon_dir);
    let status = Cmd::new(tool)
        .args(["-f", "-t"])
        .arg_path(&target)
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
    fn test_staged_install_skips_the_rebuild() {
        let ctx = InstallContext::new("", true);
        let status = refresh_with_tool(&ctx, Path::new("share/icons/hicolor"), "false").unwrap();
        assert!(status.skipped());
    }

    #[test]
    fn test_live_install_runs_the_tool() {
        let ctx = InstallContext::new("/usr", false);
        let status = refresh_with_tool(&ctx, Path::new("share/icons/hicolor"), "true").unwrap();
        assert_eq!(status, TaskStatus::Ran(ToolStatus::Success));
    }

    #[test]
    fn test_tool_failure_is_tolerated() {
        let ctx = InstallContext::new("/usr", false);
        let status = refresh_with_tool(&ctx, Path::new("share/icons/hicolor"), "false").unwrap();
        assert_eq!(status, TaskStatus::Ran(ToolStatus::Failed(1)));
    }

    #[test]
    fn test_missing_tool_is_tolerated() {
        let ctx = InstallContext::new("/usr", false);
        let status = refresh_with_tool(
            &ctx,
            Path::new("share/icons/hicolor"),
            "definitely_not_a_real_command_12345",
        )
        .unwrap();
        assert_eq!(status, TaskStatus::Ran(ToolStatus::Missing));
    }
}
