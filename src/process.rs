//! External tool invocation.
//!
//! Every external binary this crate touches goes through [`Cmd`], which
//! reports the outcome as an explicit [`ToolStatus`]. Call sites opt in
//! to tolerating a failing tool (`allow_fail`) or an absent one
//! (`allow_missing`); anything not opted into becomes an error. This
//! keeps each "ignore the result" decision visible at the call site
//! instead of buried in the wrapper.
//!
//! # Example
//!
//! ```rust,ignore
//! use desktop_postinstall::process::Cmd;
//!
//! let status = Cmd::new("glib-compile-schemas")
//!     .arg_path(schema_dir)
//!     .allow_fail()
//!     .allow_missing()
//!     .run()?;
//! ```

use anyhow::{bail, Result};
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;
use std::process::Command;

/// Outcome of one external tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    /// The tool ran and exited zero.
    Success,
    /// The tool ran and exited non-zero (signal deaths report -1).
    Failed(i32),
    /// The tool is not installed on this host.
    Missing,
}

impl ToolStatus {
    pub fn success(self) -> bool {
        matches!(self, ToolStatus::Success)
    }
}

/// Builder for a single blocking external tool invocation.
///
/// Stdio is inherited, so whatever the tool prints reaches the caller's
/// terminal directly.
pub struct Cmd {
    program: String,
    args: Vec<OsString>,
    error_msg: Option<String>,
    allow_fail: bool,
    allow_missing: bool,
}

impl Cmd {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            error_msg: None,
            allow_fail: false,
            allow_missing: false,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Append a path argument.
    pub fn arg_path(mut self, path: &Path) -> Self {
        self.args.push(path.as_os_str().to_os_string());
        self
    }

    /// Message to report when the invocation is treated as an error.
    pub fn error_msg(mut self, msg: &str) -> Self {
        self.error_msg = Some(msg.to_string());
        self
    }

    /// A non-zero exit becomes [`ToolStatus::Failed`] instead of an error.
    pub fn allow_fail(mut self) -> Self {
        self.allow_fail = true;
        self
    }

    /// An absent tool becomes [`ToolStatus::Missing`] instead of an error.
    pub fn allow_missing(mut self) -> Self {
        self.allow_missing = true;
        self
    }

    /// Run the tool and wait for it to exit.
    pub fn run(self) -> Result<ToolStatus> {
        let status = match Command::new(&self.program).args(&self.args).status() {
            Ok(status) => status,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                if self.allow_missing {
                    return Ok(ToolStatus::Missing);
                }
                bail!(
                    "{}",
                    self.message(&format!("command not found: {}", self.program))
                );
            }
            Err(err) => {
                return Err(
                    anyhow::Error::new(err).context(format!("failed to run {}", self.program))
                );
            }
        };

        if status.success() {
            return Ok(ToolStatus::Success);
        }

        let code = status.code().unwrap_or(-1);
        if self.allow_fail {
            return Ok(ToolStatus::Failed(code));
        }
        bail!(
            "{}",
            self.message(&format!("{} exited with status {}", self.program, code))
        );
    }

    fn message(&self, default: &str) -> String {
        self.error_msg
            .clone()
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_success() {
        let status = Cmd::new("true").run().unwrap();
        assert_eq!(status, ToolStatus::Success);
        assert!(status.success());
    }

    #[test]
    fn test_failure_is_an_error_by_default() {
        assert!(Cmd::new("false").run().is_err());
    }

    #[test]
    fn test_allow_fail_reports_exit_code() {
        let status = Cmd::new("false").allow_fail().run().unwrap();
        assert_eq!(status, ToolStatus::Failed(1));
        assert!(!status.success());
    }

    #[test]
    fn test_missing_tool_is_an_error_by_default() {
        assert!(Cmd::new("definitely_not_a_real_command_12345").run().is_err());
    }

    #[test]
    fn test_allow_missing_reports_missing() {
        let status = Cmd::new("definitely_not_a_real_command_12345")
            .allow_missing()
            .run()
            .unwrap();
        assert_eq!(status, ToolStatus::Missing);
    }

    #[test]
    fn test_error_msg_overrides_default() {
        let err = Cmd::new("false").error_msg("schema compile failed").run();
        assert_eq!(err.unwrap_err().to_string(), "schema compile failed");
    }

    #[test]
    fn test_args_are_forwarded() {
        // `test -e /` exits 0, `test -e <garbage>` exits 1
        let status = Cmd::new("test").args(["-e", "/"]).run().unwrap();
        assert_eq!(status, ToolStatus::Success);

        let status = Cmd::new("test")
            .arg("-e")
            .arg_path(Path::new("/no/such/path/12345"))
            .allow_fail()
            .run()
            .unwrap();
        assert_eq!(status, ToolStatus::Failed(1));
    }
}
