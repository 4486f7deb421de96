//! Post-install housekeeping tasks.
//!
//! One module per operation the install manifest can request. Every
//! entry function takes an [`InstallContext`](crate::InstallContext)
//! explicitly and skips itself for staged installs.

pub mod desktop_file;
pub mod icon_cache;
pub mod metainfo;
pub mod post_install;
pub mod schemas;

pub use desktop_file::ValidationReport;

use crate::process::ToolStatus;

/// What a best-effort task did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Staged install: nothing was attempted.
    Skipped,
    /// The tool was invoked; the status records how that went.
    Ran(ToolStatus),
}

impl TaskStatus {
    pub fn skipped(self) -> bool {
        matches!(self, TaskStatus::Skipped)
    }
}
