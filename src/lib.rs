//! Post-install housekeeping for desktop application packages.
//!
//! A build system runs these helpers at install time to keep the
//! desktop environment's caches in step with the files it just
//! installed:
//!
//! - **Icon cache refresh** - forced rebuild of the icon theme cache
//! - **Desktop entry validation** - `desktop-file-validate` over the
//!   installed launchers, aggregated into one result
//! - **Metainfo validation** - `appstreamcli` over the installed
//!   AppStream metadata
//! - **Schema compilation** - `glib-compile-schemas` for the settings
//!   backend
//! - **Preflight checks** - host tool availability for CI and packagers
//!
//! All of it is orchestration: the real work happens in external tools,
//! and a staged install (non-empty `DESTDIR`) skips every step because
//! the caches belong to the running system, not the staging root.
//!
//! Each helper is a standalone binary under `src/bin/`; the library
//! holds the shared machinery. The process-boundary contract lives in
//! [`context`] (environment) and the binaries themselves (positional
//! arguments, exit codes).

pub mod context;
pub mod preflight;
pub mod process;
pub mod tasks;

pub use context::InstallContext;
pub use process::{Cmd, ToolStatus};
