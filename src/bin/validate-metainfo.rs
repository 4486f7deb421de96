use anyhow::{bail, Result};
use std::path::Path;

use desktop_postinstall::tasks::metainfo::validate_metainfo_files;
use desktop_postinstall::InstallContext;

fn usage() -> &'static str {
    "Usage: validate-metainfo <base-dir> <file>...\n\n<base-dir> is relative to MESON_INSTALL_PREFIX."
}

fn main() -> Result<()> {
    let ctx = InstallContext::from_env()?;
    if ctx.staged {
        return Ok(());
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let report = match args.as_slice() {
        [base_dir, files @ ..] if !files.is_empty() => {
            validate_metainfo_files(&ctx, Path::new(base_dir), files)?
        }
        _ => bail!(usage()),
    };

    if !report.is_clean() {
        bail!("{} metainfo file(s) failed validation", report.failed);
    }
    Ok(())
}
