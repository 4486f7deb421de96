//! Combined post-install step.
//!
//! The install manifest runs this once at the end of a live install:
//! refresh the hicolor icon cache under the shared data directory, then
//! compile the gsettings schemas. Both steps are best-effort and their
//! outcomes are not inspected; the install itself always succeeds.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::context::InstallContext;
use crate::tasks::{icon_cache, schemas};

/// Icon theme directory beneath the shared data directory.
const HICOLOR_SUBDIR: &str = "icons/hicolor";

/// Run the combined step. Returns whether the steps ran; a staged
/// install skips them without output.
pub fn run_post_install(ctx: &InstallContext, datadir: &Path, schema_dir: &Path) -> Result<bool> {
    run_with_tools(
        ctx,
        datadir,
        schema_dir,
        icon_cache::ICON_CACHE_TOOL,
        schemas::SCHEMA_COMPILER,
    )
}

pub(crate) fn run_with_tools(
    ctx: &InstallContext,
    datadir: &Path,
    schema_dir: &Path,
    icon_tool: &str,
    schema_tool: &str,
) -> Result<bool> {
    if ctx.staged {
        return Ok(false);
    }

    println!("Updating icon cache...");
    icon_cache::refresh_with_tool(ctx, &hicolor_dir(datadir), icon_tool)?;

    println!("Compiling gsettings schemas...");
    schemas::compile_with_tool(ctx, schema_dir, schema_tool)?;

    Ok(true)
}

fn hicolor_dir(datadir: &Path) -> PathBuf {
    datadir.join(HICOLOR_SUBDIR)
}
