//! AppStream metainfo validation.
//!
//! Same aggregate contract as desktop entry validation, driven through
//! `appstreamcli`. Network checks are disabled so the result depends
//! only on the file itself.

use anyhow::Result;
use std::path::Path;

use crate::context::InstallContext;
use crate::tasks::desktop_file::{validate_each, ValidationReport};

const APPSTREAMCLI: &[&str] = &["appstreamcli", "validate", "--no-net", "--pedantic"];

/// Validate installed metainfo files under `<prefix>/<base_dir>`.
pub fn validate_metainfo_files(
    ctx: &InstallContext,
    base_dir: &Path,
    files: &[String],
) -> Result<ValidationReport> {
    validate_each(ctx, base_dir, files, APPSTREAMCLI)
}
