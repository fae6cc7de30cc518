//! Svn command runner
//!
//! Wraps the external `svn` binary with captured output and structured
//! errors. All svn invocations go through [`SvnClient`] so the pinned
//! revision and any pass-through arguments are applied consistently.

pub mod executor;
pub mod url;

pub use url::SvnUrl;

use std::path::Path;
use std::process::{Command, Output};

use console::style;

use crate::error::{Result, SparsevnError};

/// Depth argument accepted by `svn checkout`/`svn update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvnDepth {
    Empty,
    Files,
    Infinity,
}

impl SvnDepth {
    pub fn as_str(self) -> &'static str {
        match self {
            SvnDepth::Empty => "empty",
            SvnDepth::Files => "files",
            SvnDepth::Infinity => "infinity",
        }
    }
}

/// Captured output of a successful svn command
#[derive(Debug, Clone)]
pub struct SvnOutput {
    pub stdout: String,
    pub stderr: String,
}

impl SvnOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Svn client pinned to one revision, carrying pass-through arguments
#[derive(Debug, Clone)]
pub struct SvnClient {
    revision: String,
    extra_args: Vec<String>,
}

impl SvnClient {
    pub fn new(revision: impl Into<String>, extra_args: Vec<String>) -> Self {
        Self {
            revision: revision.into(),
            extra_args,
        }
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Read a file's contents from the repository
    pub fn cat(&self, target: &str) -> Result<String> {
        let args = self.build_args(&["cat", "-r", &self.revision, target]);
        let output = run_svn(None, &args, false)?;
        Ok(output.stdout)
    }

    /// List the entries of a repository directory
    pub fn ls(&self, target: &str) -> Result<Vec<String>> {
        let args = self.build_args(&["ls", target]);
        let output = run_svn(None, &args, false)?;
        Ok(output.lines().iter().map(ToString::to_string).collect())
    }

    /// Check out the top of a tree with empty depth into `folder`
    pub fn checkout_empty(&self, url: &str, folder: &str) -> Result<()> {
        let args = self.build_args(&[
            "checkout",
            "--depth",
            "empty",
            "-r",
            &self.revision,
            url,
            folder,
        ]);
        run_svn(None, &args, true)?;
        Ok(())
    }

    /// Change the sticky depth of a working copy path
    pub fn update_set_depth(&self, cwd: &Path, path: &str, depth: SvnDepth) -> Result<()> {
        let target = if path.is_empty() { "." } else { path };
        let args = self.build_args(&[
            "update",
            "--set-depth",
            depth.as_str(),
            "-r",
            &self.revision,
            target,
        ]);
        run_svn(Some(cwd), &args, true)?;
        Ok(())
    }

    /// Pass-through arguments first, then the operation's own arguments
    fn build_args(&self, op_args: &[&str]) -> Vec<String> {
        let mut args = self.extra_args.clone();
        args.extend(op_args.iter().map(ToString::to_string));
        args
    }
}

/// Run one svn command, echoing it first when `echo` is set.
///
/// A non-zero exit aborts the whole run; stderr is preferred for the error
/// message, falling back to stdout.
fn run_svn(cwd: Option<&Path>, args: &[String], echo: bool) -> Result<SvnOutput> {
    let command_line = format!("svn {}", args.join(" "));
    if echo {
        println!("{}", style(&command_line).dim());
    }

    let mut command = Command::new("svn");
    if let Some(cwd) = cwd {
        command.current_dir(cwd);
    }

    let output = command
        .args(args)
        .output()
        .map_err(|e| SparsevnError::SvnCommandFailed {
            command: command_line.clone(),
            reason: format!("failed to execute svn: {e} (is svn installed?)"),
        })?;

    let svn_output = SvnOutput::from_output(&output);

    if output.status.success() {
        Ok(svn_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let message = if svn_output.stderr.is_empty() {
            svn_output.stdout
        } else {
            svn_output.stderr
        };
        Err(SparsevnError::SvnCommandFailed {
            command: command_line,
            reason: format!("exit code {exit_code}: {message}"),
        })
    }
}
