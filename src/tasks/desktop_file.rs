//! Desktop entry validation.
//!
//! Runs the validator over every installed `.desktop` file the build
//! step names, in order, and aggregates the result: a bad file marks
//! the run as failed but never stops the remaining files from being
//! checked, and a host without the validator skips the files with no
//! effect on the aggregate.

use anyhow::{bail, Result};
use std::path::Path;

use crate::context::InstallContext;
use crate::process::{Cmd, ToolStatus};

const DESKTOP_FILE_VALIDATE: &str = "desktop-file-validate";

/// Aggregate outcome of one validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Files the external validator actually checked.
    pub checked: usize,
    /// Checked files the validator rejected.
    pub failed: usize,
    /// Files skipped because the validator is not installed.
    pub skipped: usize,
}

impl ValidationReport {
    /// Absence of the validator is not a failure; only a rejected file is.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Validate installed desktop entry files under `<prefix>/<base_dir>`.
pub fn validate_desktop_files(
    ctx: &InstallContext,
    base_dir: &Path,
    files: &[String],
) -> Result<ValidationReport> {
    validate_each(ctx, base_dir, files, &[DESKTOP_FILE_VALIDATE])
}

/// Run `tool` once per file, aggregating instead of short-circuiting.
///
/// `tool` is the fixed argv prefix (program plus any flags); the file
/// path is appended as the final argument.
pub(crate) fn validate_each(
    ctx: &InstallContext,
    base_dir: &Path,
    files: &[String],
    tool: &[&str],
) -> Result<ValidationReport> {
    if ctx.staged {
        return Ok(ValidationReport::default());
    }
    if files.is_empty() {
        bail!("no files to validate");
    }

    let dir = ctx.resolve(base_dir);
    let mut report = ValidationReport::default();
    for file in files {
        let path = dir.join(file);
        let status = Cmd::new(tool[0])
            .args(&tool[1..])
            .arg_path(&path)
            .allow_fail()
            .allow_missing()
            .run()?;
        match status {
            ToolStatus::Success => report.checked += 1,
            ToolStatus::Failed(_) => {
                report.checked += 1;
                report.failed += 1;
            }
            ToolStatus::Missing => report.skipped += 1,
        }
    }

    Ok(report)
}
