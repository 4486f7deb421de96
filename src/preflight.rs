//! Preflight checks for the post-install host tools.
//!
//! The install-time helpers tolerate a missing tool, so a host that
//! lacks one fails silently rather than loudly. This check exists for
//! CI and packagers who want to know up front what the install step
//! will actually be able to do.
//!
//! # Example
//!
//! ```rust,ignore
//! use desktop_postinstall::preflight::{command_exists, check_host_tools};
//!
//! if !command_exists("desktop-file-validate") {
//!     println!("desktop-file-utils not installed");
//! }
//!
//! check_host_tools()?;
//! ```

use anyhow::{bail, Result};

/// External tools the post-install helpers invoke.
///
/// Each tuple is (command_name, package_name).
pub const HOST_TOOLS: &[(&str, &str)] = &[
    ("gtk-update-icon-cache", "gtk-update-icon-cache"),
    ("desktop-file-validate", "desktop-file-utils"),
    ("glib-compile-schemas", "glib2"),
    ("appstreamcli", "appstream"),
];

/// Check if a command resolves on PATH.
pub fn command_exists(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

/// Check that specific tools are available.
///
/// # Arguments
///
/// * `tools` - Slice of (command, package) tuples
///
/// # Returns
///
/// * `Ok(())` if all tools are found
/// * `Err` listing the missing tools and the packages that provide them
pub fn check_required_tools(tools: &[(&str, &str)]) -> Result<()> {
    let mut missing = Vec::new();

    for (tool, package) in tools {
        if !command_exists(tool) {
            missing.push((*tool, *package));
        }
    }

    if !missing.is_empty() {
        let msg = missing
            .iter()
            .map(|(t, p)| format!("  {} (install: {})", t, p))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("Missing post-install host tools:\n{}", msg);
    }

    Ok(())
}

/// Check that all tools in [`HOST_TOOLS`] are available.
pub fn check_host_tools() -> Result<()> {
    check_required_tools(HOST_TOOLS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        // 'ls' should exist on any Unix system
        assert!(command_exists("ls"));
        assert!(!command_exists("definitely_not_a_real_command_12345"));
    }

    #[test]
    fn test_check_required_tools_success() {
        let tools = &[("ls", "coreutils"), ("cat", "coreutils")];
        assert!(check_required_tools(tools).is_ok());
    }

    #[test]
    fn test_check_required_tools_failure_names_the_package() {
        let tools = &[("definitely_not_a_real_command_12345", "fake-package")];
        let err = check_required_tools(tools).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("definitely_not_a_real_command_12345"));
        assert!(msg.contains("fake-package"));
    }
}
