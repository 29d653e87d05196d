//! External command execution.
//!
//! Commands are spawned directly (no intermediate shell) so arguments reach
//! the program exactly as built. Bootstrap scripts that need a shell spell
//! the interpreter out themselves.

use crate::error::{Result, SetupError};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name or path, resolved through `PATH`.
    pub program: String,
    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Build a spec from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Prefix the command with `sudo`.
    pub fn with_sudo(self) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: "sudo".to_string(),
            args,
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Stdout followed by stderr.
    ///
    /// Some tools print their version banner on stderr.
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&self.stderr);
        }
        out
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Capture stdout and stderr (if false, both inherit from parent).
    pub capture: bool,
}

impl CommandOptions {
    /// Options that capture output.
    pub fn captured() -> Self {
        Self {
            capture: true,
            ..Default::default()
        }
    }

    /// Options that let the child write to the terminal.
    pub fn inherited() -> Self {
        Self::default()
    }
}

/// Signature shared by the real executor and test doubles.
pub type RunCommand<'a> = &'a dyn Fn(&CommandSpec, &CommandOptions) -> Result<CommandResult>;

/// Execute a command, blocking until it exits.
///
/// A command that cannot be spawned (typically: not on `PATH`) returns
/// [`SetupError::CommandSpawn`]; a command that runs and fails returns
/// `Ok` with `success == false`.
pub fn execute(spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    if options.capture {
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    }
    cmd.stdin(Stdio::inherit());

    tracing::debug!("Executing: {}", spec);

    let output = cmd.output().map_err(|e| SetupError::CommandSpawn {
        command: spec.to_string(),
        message: e.to_string(),
    })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_display_joins_args() {
        let spec = CommandSpec::new("git", ["submodule", "update", "--init"]);
        assert_eq!(spec.to_string(), "git submodule update --init");
    }

    #[test]
    fn spec_display_quotes_args_with_spaces() {
        let spec = CommandSpec::new("bash", ["-c", "echo hi"]);
        assert_eq!(spec.to_string(), "bash -c \"echo hi\"");
    }

    #[test]
    fn with_sudo_prepends_program() {
        let spec = CommandSpec::new("apt-get", ["install", "-y", "git"]).with_sudo();
        assert_eq!(spec.program, "sudo");
        assert_eq!(spec.args, vec!["apt-get", "install", "-y", "git"]);
    }

    #[test]
    fn combined_output_appends_stderr() {
        let result = CommandResult::success(
            "out".to_string(),
            "err\n".to_string(),
            Duration::ZERO,
        );
        assert_eq!(result.combined_output(), "out\nerr\n");
    }

    #[test]
    fn combined_output_with_only_stderr() {
        let result = CommandResult::failure(
            Some(1),
            String::new(),
            "cl version 19.38".to_string(),
            Duration::ZERO,
        );
        assert_eq!(result.combined_output(), "cl version 19.38");
    }

    #[test]
    fn execute_missing_program_is_spawn_error() {
        let spec = CommandSpec::new("definitely-not-a-real-program-beesetup", ["--version"]);
        let err = execute(&spec, &CommandOptions::captured()).unwrap_err();
        assert!(matches!(err, SetupError::CommandSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn execute_captures_stdout() {
        let spec = CommandSpec::new("sh", ["-c", "echo hello"]);
        let result = execute(&spec, &CommandOptions::captured()).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_reports_failure_exit_code() {
        let spec = CommandSpec::new("sh", ["-c", "exit 3"]);
        let result = execute(&spec, &CommandOptions::captured()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn execute_with_env_and_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut options = CommandOptions::captured();
        options.cwd = Some(temp.path().to_path_buf());
        options
            .env
            .insert("BEESETUP_TEST_VAR".to_string(), "bee".to_string());

        let spec = CommandSpec::new("sh", ["-c", "echo $BEESETUP_TEST_VAR; pwd"]);
        let result = execute(&spec, &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("bee"));
    }
}
