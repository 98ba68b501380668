//! Command executor.
//!
//! Spawns the underlying `git` command with a discrete argument vector.
//! Arguments are never concatenated into a shell string, so entity names
//! containing spaces or shell metacharacters survive intact.

use crate::core::error::Result;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Run `git <base> <preset...> <args...>` in `workdir` with inherited
/// stdio, returning the child's exit status.
pub fn run_git(workdir: &Path, base: &str, preset: &[&str], args: &[String]) -> Result<ExitStatus> {
    let mut cmd = Command::new("git");
    cmd.arg(base);
    cmd.args(preset);
    cmd.args(args);
    cmd.current_dir(workdir);

    log::debug!("Spawning git {base} with {} argument(s)", preset.len() + args.len());
    let status = cmd.status()?;
    Ok(status)
}
