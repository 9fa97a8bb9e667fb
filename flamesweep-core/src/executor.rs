//! Running profiler commands.
//!
//! The runner only needs one capability from the outside world: run a command
//! to completion with the child's stdout/stderr passed straight through, then
//! report how it exited. [`CommandExecutor`] captures that so the loop can be
//! driven by a scripted executor in tests.

use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::command::ProfilerCommand;

/// How a child process exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    code: Option<i32>,
}

impl ProcessStatus {
    /// A process that exited normally with `code`.
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// A process that was terminated without an exit code (e.g. by a signal).
    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ProcessStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => write!(f, "no exit status (terminated by signal)"),
        }
    }
}

/// Runs a command synchronously and reports its exit status.
pub trait CommandExecutor {
    /// Run `command` from `working_dir`, blocking until it exits.
    ///
    /// An `Err` means the process could not be started at all.
    fn run(&mut self, command: &ProfilerCommand, working_dir: &Path) -> io::Result<ProcessStatus>;
}

/// Executor backed by real child processes with inherited standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn run(&mut self, command: &ProfilerCommand, working_dir: &Path) -> io::Result<ProcessStatus> {
        tracing::debug!(%command, dir = %working_dir.display(), "spawning profiler");

        let status = Command::new(command.program())
            .args(command.args())
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        tracing::debug!(%command, ?status, "profiler exited");
        Ok(status.into())
    }
}
