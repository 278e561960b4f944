//! Benchmark candidates wrapping a directory analysis
//!
//! Both candidates run their analysis on a blocking task and discard the result.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context};
use async_trait::async_trait;

use crate::analysis::{analyze_directory, AnalyzeOptions};
use crate::core::candidate::Candidate;

/// Native analysis of a fixed directory
#[derive(Debug, Clone)]
pub struct NativeAnalysis {
    root: PathBuf,
    options: AnalyzeOptions,
}

impl NativeAnalysis {
    pub fn new(root: impl Into<PathBuf>, options: AnalyzeOptions) -> Self {
        Self { root: root.into(), options }
    }
}

#[async_trait]
impl Candidate for NativeAnalysis {
    async fn invoke(&self) -> anyhow::Result<()> {
        let root = self.root.clone();
        let options = self.options.clone();
        let _stats = tokio::task::spawn_blocking(move || analyze_directory(&root, &options))
            .await
            .context("analysis task did not complete")?
            .with_context(|| format!("failed to analyze {}", self.root.display()))?;
        Ok(())
    }
}

/// Reference implementation run as an external program
///
/// The target directory is passed as the last argument. A non-zero exit
/// status counts as a failed invocation.
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    root: PathBuf,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            root: root.into(),
        }
    }

    /// Command line as shown in logs
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.push(self.root.display().to_string());
        parts.join(" ")
    }
}

#[async_trait]
impl Candidate for ExternalCommand {
    async fn invoke(&self) -> anyhow::Result<()> {
        let program = self.program.clone();
        let args = self.args.clone();
        let root = self.root.clone();

        let output = tokio::task::spawn_blocking(move || {
            Command::new(&program)
                .args(&args)
                .arg(&root)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::piped())
                .output()
        })
        .await
        .context("command task did not complete")?
        .with_context(|| format!("failed to spawn `{}`", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("`{}` exited with {}: {}", self.command_line(), output.status, stderr.trim());
        }
        Ok(())
    }
}
