//! Package manager notification.
//!
//! After a package is written the host package manager has to re-scan its
//! packages. How that happens depends on the host, so it is a hook.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};

/// Tells the host package manager to re-resolve installed packages.
#[cfg_attr(test, mockall::automock)]
pub trait ResolveHook {
    fn resolve(&self) -> CoreResult<()>;
}

/// Does nothing. Unity picks up embedded packages on its next refresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolve;

impl ResolveHook for NoopResolve {
    fn resolve(&self) -> CoreResult<()> {
        debug!("No resolve command configured, skipping package resolve");
        Ok(())
    }
}

/// Runs an external command, e.g. a batch-mode Unity invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResolve {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandResolve {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    /// Split a command line on whitespace. Returns `None` for a blank line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self {
            program: program.to_string(),
            args: parts.map(String::from).collect(),
            working_dir: None,
        })
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ResolveHook for CommandResolve {
    fn resolve(&self) -> CoreResult<()> {
        info!("Resolving packages with `{} {}`", self.program, self.args.join(" "));

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|e| CoreError::ResolveFailed(format!("{}: {}", self.program, e)))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(CoreError::ResolveFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_line() {
        let hook = CommandResolve::parse("unity -batchmode  -quit").unwrap();
        assert_eq!(hook.program(), "unity");
        assert_eq!(hook.args(), ["-batchmode", "-quit"]);
        assert!(CommandResolve::parse("   ").is_none());
    }

    #[test]
    fn test_missing_program_fails() {
        let hook = CommandResolve::new("upm-definitely-not-a-real-program");
        assert!(matches!(hook.resolve(), Err(CoreError::ResolveFailed(_))));
    }

    #[test]
    fn test_noop_resolve() {
        assert!(NoopResolve.resolve().is_ok());
    }
}
