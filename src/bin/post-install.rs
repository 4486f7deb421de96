use anyhow::{bail, Result};
use std::path::Path;

use desktop_postinstall::tasks::post_install::run_post_install;
use desktop_postinstall::InstallContext;

fn usage() -> &'static str {
    "Usage: post-install <datadir> <schema-dir>\n\n<datadir> is relative to MESON_INSTALL_PREFIX; the icon cache is\nrebuilt under <datadir>/icons/hicolor. <schema-dir> is passed to the\nschema compiler as given."
}

fn main() -> Result<()> {
    let ctx = InstallContext::from_env()?;
    if ctx.staged {
        return Ok(());
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [datadir, schema_dir] => {
            run_post_install(&ctx, Path::new(datadir), Path::new(schema_dir))?;
            Ok(())
        }
        _ => bail!(usage()),
    }
}
