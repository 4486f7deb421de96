//! Install context shared by every post-install task.
//!
//! The build system communicates through the environment: the install
//! prefix arrives in `MESON_INSTALL_PREFIX`, and a non-empty `DESTDIR`
//! marks a staged install. Both are read once at startup and carried in
//! an [`InstallContext`] that is passed into each task explicitly, so
//! the tasks themselves never touch the process environment.

use anyhow::{Context, Result};
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Environment variable naming the installation prefix.
pub const INSTALL_PREFIX_VAR: &str = "MESON_INSTALL_PREFIX";

/// Environment variable marking a staged install.
pub const DESTDIR_VAR: &str = "DESTDIR";

/// Prefix and staging mode for one install run.
#[derive(Debug, Clone)]
pub struct InstallContext {
    /// Installation prefix. Empty for staged runs, which never use it.
    pub prefix: PathBuf,
    /// Whether files are being written under a staging root. Staged
    /// installs must not touch the live icon cache or schema store.
    pub staged: bool,
}

impl InstallContext {
    pub fn new(prefix: impl Into<PathBuf>, staged: bool) -> Self {
        Self {
            prefix: prefix.into(),
            staged,
        }
    }

    /// Read the context from the process environment.
    ///
    /// `DESTDIR` is consulted first; a staged run succeeds even when
    /// the prefix is not set, because nothing will use it.
    pub fn from_env() -> Result<Self> {
        if destdir_is_set(env::var_os(DESTDIR_VAR).as_deref()) {
            return Ok(Self::new(PathBuf::new(), true));
        }

        let prefix = env::var_os(INSTALL_PREFIX_VAR)
            .with_context(|| format!("{} is not set", INSTALL_PREFIX_VAR))?;
        Ok(Self::new(PathBuf::from(prefix), false))
    }

    /// Absolute path for a prefix-relative install path.
    pub fn resolve(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.prefix.join(rel)
    }
}

/// Non-emptiness is what marks a staged install, not the value.
pub fn destdir_is_set(value: Option<&OsStr>) -> bool {
    value.map_or(false, |v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destdir_empty_or_absent_is_live() {
        assert!(!destdir_is_set(None));
        assert!(!destdir_is_set(Some(OsStr::new(""))));
        assert!(destdir_is_set(Some(OsStr::new("/tmp/staging"))));
    }

    #[test]
    fn test_resolve_joins_prefix() {
        let ctx = InstallContext::new("/usr", false);
        assert_eq!(
            ctx.resolve("share/icons/hicolor"),
            Path::new("/usr/share/icons/hicolor")
        );
    }

    #[test]
    fn test_staged_context_carries_no_prefix() {
        let ctx = InstallContext::new(PathBuf::new(), true);
        assert!(ctx.staged);
        assert_eq!(ctx.prefix, PathBuf::new());
    }
}
