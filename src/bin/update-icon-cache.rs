use anyhow::{bail, Result};
use std::path::Path;

use desktop_postinstall::tasks::icon_cache::update_icon_cache;
use desktop_postinstall::InstallContext;

fn usage() -> &'static str {
    "Usage: update-icon-cache <icon-dir>\n\n<icon-dir> is relative to MESON_INSTALL_PREFIX."
}

fn main() -> Result<()> {
    // DESTDIR is checked before the arguments, so a staged install
    // exits 0 no matter how it was invoked.
    let ctx = InstallContext::from_env()?;
    if ctx.staged {
        return Ok(());
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [icon_dir] => {
            update_icon_cache(&ctx, Path::new(icon_dir))?;
            Ok(())
        }
        _ => bail!(usage()),
    }
}
